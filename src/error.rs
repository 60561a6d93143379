use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while building queries or talking to the
/// recommendation service
#[derive(Error, Debug)]
pub enum RecommendError {
    /// A form field was missing or could not be parsed
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Failed to reach the recommendation service
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service returned status {0}")]
    Status(StatusCode),

    /// No recipe exists under the given identifier
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// The service answered with a body we could not decode
    #[error("Failed to decode response: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl RecommendError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        RecommendError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
