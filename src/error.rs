use thiserror::Error;

use crate::field::FieldId;

/// Errors raised by field metadata, configuration, and file handling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValuesError {
    #[error("Unknown value mode {0:?} (expected \"none\", \"list\" or \"search\")")]
    UnknownValueMode(String),

    #[error("Field {field} uses search mode but no search field was supplied")]
    MissingSearchField { field: FieldId },

    #[error("Invalid field descriptor: {0}")]
    InvalidField(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FieldValuesError {
    fn from(err: std::io::Error) -> Self {
        FieldValuesError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FieldValuesError {
    fn from(err: serde_json::Error) -> Self {
        FieldValuesError::InvalidField(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FieldValuesError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
