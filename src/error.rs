use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Structured validation errors with field-level error mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationErrors {
    Single { field: String, message: String },
    Multiple { fields: HashMap<String, String> },
}

impl ValidationErrors {
    /// Creates a single-field validation error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Single {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the message for a given field, if present.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            Self::Single { field: f, message } if f == field => Some(message),
            Self::Single { .. } => None,
            Self::Multiple { fields } => fields.get(field).map(String::as_str),
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single { field, message } => write!(f, "{}: {}", field, message),
            Self::Multiple { fields } => {
                let mut parts: Vec<String> = fields
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message))
                    .collect();
                parts.sort();
                write!(f, "{}", parts.join("; "))
            }
        }
    }
}

/// The custom error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error with field-level details.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A malformed or empty data URI.
    #[error("Invalid data URI: {0}")]
    DataUri(String),

    /// A failure from the image classification provider.
    #[error("Provider error: {0}")]
    Provider(String),

    /// An HTTP transport error from the provider call.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a validation error for a single named field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(field, message))
    }
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;
