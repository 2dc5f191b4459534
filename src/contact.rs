//! "Contact us" call-to-action links carrying the recommended station model.

use serde::Serialize;

use crate::config::ContactConfig;
use crate::sizing::StationModel;

/// Base of the click-to-chat links.
const CHAT_BASE_URL: &str = "https://wa.me";

/// One call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    /// Button label.
    pub label: String,
    /// Phone number, digits only.
    pub phone: String,
    /// Click-to-chat URL with a pre-filled message.
    pub url: String,
}

/// Builds the quote and advice links for a recommendation.
pub fn contact_links(config: &ContactConfig, model: StationModel) -> Vec<ContactLink> {
    vec![
        link(
            "Quote",
            &config.quote_phone,
            &format!("Hello! I would like a quote for the {model} power station."),
        ),
        link(
            "Advice",
            &config.advice_phone,
            &format!("Hello! I would like advice about the {model} power station."),
        ),
    ]
}

fn link(label: &str, phone: &str, message: &str) -> ContactLink {
    ContactLink {
        label: label.to_string(),
        phone: phone.to_string(),
        url: format!(
            "{CHAT_BASE_URL}/{phone}?text={}",
            urlencoding::encode(message)
        ),
    }
}
