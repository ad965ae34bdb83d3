//! Error types for flkit

use crate::model::{Arity, LayoutKind};
use crate::templates::TemplateError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// flkit errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} requires {expected} view(s), got {actual}")]
    InvalidArity {
        kind: LayoutKind,
        expected: Arity,
        actual: usize,
    },

    #[error("Invalid view name '{0}': must be a Swift identifier")]
    InvalidIdentifier(String),

    #[error("Duplicate view name '{0}' in layout")]
    DuplicateView(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
