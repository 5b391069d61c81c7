//! Errors for flight tracker
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightTrackerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Provider returned HTTP status {0}")]
    StatusError(reqwest::StatusCode),

    #[error("Provider error {code}: {message}")]
    ProviderError { code: String, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {message}")]
    ConfigurationError { message: String },
}
