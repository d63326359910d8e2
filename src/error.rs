use std::fmt;
use thiserror::Error;

/// Errors that abort code-behind generation for a whole document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Connection {connection_id} references null object ID")]
    NullOwnerIdentity { connection_id: i64 },
}

/// Errors that can occur when converting deserializer output into a `Document`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Failed to parse document JSON: {0}")]
    JsonParseError(String),

    #[error("Node link #{index} is out of range, the document declares {len} nodes")]
    DanglingNode { index: usize, len: usize },

    #[error("Invalid document value: {0}")]
    InvalidValue(String),
}

/// Errors that can occur while rendering declarations to source text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("Formatting failed")]
    Format(#[from] fmt::Error),
}

/// Errors that can occur while loading generator options from disk.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Could not read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
