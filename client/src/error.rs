//! Client error handling
//!
//! Errors here never reach the user directly. The form controller turns
//! them into notices and leaves the form usable for another attempt.

use thiserror::Error;

/// Client error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad(#[from] config::ConfigError),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
