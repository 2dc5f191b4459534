//! TOML-based calculator configuration: sizing constants, catalog additions,
//! and contact numbers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{LoadCatalog, LoadCatalogEntry};
use crate::selection::{PEAK_POWER_RANGE_W, POWER_RANGE_W, USAGE_RANGE_HOURS};
use crate::sizing::SizingParameters;

/// Top-level calculator configuration parsed from TOML.
///
/// Every section defaults to the built-in values, so an empty file is a
/// valid configuration. Load with [`SizerConfig::from_toml_file`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizerConfig {
    /// Sizing pipeline constants.
    pub sizing: SizingParameters,
    /// Loads added to (or overriding) the built-in catalog.
    pub catalog: CatalogConfig,
    /// Call-to-action phone numbers.
    pub contact: ContactConfig,
}

/// Catalog additions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Extra entries; a name matching a built-in load replaces its defaults.
    pub loads: Vec<LoadCatalogEntry>,
}

/// Phone numbers behind the "contact us" links, digits with country code.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Sales line for quotes.
    pub quote_phone: String,
    /// Technical advice line.
    pub advice_phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            quote_phone: "5491151857753".to_string(),
            advice_phone: "5491166230246".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"sizing.panel_watts"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl SizerConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Builds the effective catalog: built-in loads plus configured entries.
    pub fn catalog(&self) -> LoadCatalog {
        let mut catalog = LoadCatalog::builtin();
        catalog.extend(self.catalog.loads.iter().cloned());
        catalog
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.sizing.validate();

        if let Err(e) = LoadCatalog::new(self.catalog.loads.clone()) {
            errors.push(e);
        }
        for (i, entry) in self.catalog.loads.iter().enumerate() {
            let values = [
                ("power_w", entry.power_w, &POWER_RANGE_W),
                ("peak_power_w", entry.peak_power_w, &PEAK_POWER_RANGE_W),
                ("usage_hours", entry.usage_hours, &USAGE_RANGE_HOURS),
            ];
            for (name, value, range) in values {
                if !value.is_finite() {
                    errors.push(ConfigError::new(
                        format!("catalog.loads[{i}].{name}"),
                        "must be a finite number",
                    ));
                } else if !range.contains(&value) {
                    errors.push(ConfigError::new(
                        format!("catalog.loads[{i}].{name}"),
                        format!(
                            "must be in [{}, {}], got {value}",
                            range.start(),
                            range.end()
                        ),
                    ));
                }
            }
        }

        let phones = [
            ("contact.quote_phone", &self.contact.quote_phone),
            ("contact.advice_phone", &self.contact.advice_phone),
        ];
        for (field, phone) in phones {
            if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
                errors.push(ConfigError::new(
                    field,
                    format!("must be digits only (country code included), got \"{phone}\""),
                ));
            }
        }

        errors
    }
}
