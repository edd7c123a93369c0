//! Error types for the plugin binary
//!
//! Documentation failures never show up here: they travel back to the host
//! in the response's `error` field. These errors cover the plugin protocol
//! itself and the binary's own settings.

use std::io;

/// Result type alias for binary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the plugin binary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (reading the request, writing the response)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The request bytes are not a valid code generator request
    #[error("Failed to decode plugin request: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON settings file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML settings file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Decode(_) => 2,
            Self::Config(_) => 3,
            Self::Json(_) => 4,
            Self::Yaml(_) => 5,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
