//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input configuration file missing or malformed
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What went wrong while loading the input document
        message: String,
    },

    /// API request returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Network error while reaching the translation provider
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport error
        message: String,
    },

    /// Provider response could not be parsed
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was missing or malformed
        message: String,
    },

    /// Output serialization or file creation failed
    #[error("Write error: {path} - {message}")]
    WriteError {
        /// Destination path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
