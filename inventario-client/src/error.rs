//! Client error types

use thiserror::Error;

use crate::form::FormError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation rejected by the server (e.g. insufficient stock)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Form field could not be coerced into a payload
    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
