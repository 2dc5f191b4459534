//! API response types.

use serde::Serialize;

use crate::config::ConfigError;

/// Error response body for 400/404 errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Offending fields, when the request failed validation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ConfigError>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    /// Request body that could not be parsed into a scenario.
    pub fn malformed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            error: format!("malformed request body: {reason}"),
            details: vec![ConfigError::new("body", reason)],
        }
    }

    /// Wraps validation errors.
    pub fn invalid(details: Vec<ConfigError>) -> Self {
        Self {
            error: format!("invalid scenario: {} error(s)", details.len()),
            details,
        }
    }
}
