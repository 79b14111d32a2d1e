//! Error types for the tasktalk crates.

use thiserror::Error;

/// Generic message shown to the user when a failure carries no detail of its own.
pub const GENERIC_SEND_FAILURE: &str = "Failed to send message";

/// A shared error type for the tasktalk crates.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum ChatError {
    /// Transport-level failure (connection refused, timeout, malformed body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The assistant endpoint answered with a non-success status
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an Api error
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The human-readable message to surface in the session error banner.
    ///
    /// Falls back to [`GENERIC_SEND_FAILURE`] when the failure carries no
    /// message of its own (e.g. an API error with an empty detail body).
    pub fn user_message(&self) -> String {
        let detail = match self {
            Self::Api { detail, .. } => detail,
            Self::Transport(message)
            | Self::Config(message)
            | Self::Internal(message)
            | Self::Serialization { message, .. } => message,
        };

        if detail.trim().is_empty() {
            GENERIC_SEND_FAILURE.to_string()
        } else {
            detail.clone()
        }
    }
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ChatError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ChatError>`.
pub type Result<T> = std::result::Result<T, ChatError>;
