//! Error types for snapshot decoding, body access and file I/O

use std::io;

/// Reasons a snapshot (or a single body record) failed to decode
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("snapshot is missing the {0} header")]
    MissingHeader(&'static str),

    #[error("invalid body count {0:?}")]
    BadCount(String),

    #[error("extent must be non-negative, got {0}")]
    NegativeExtent(f64),

    #[error("body record {index} ended before its {field} field")]
    Truncated { index: usize, field: &'static str },

    #[error("invalid {field} value {token:?}")]
    BadNumber { field: &'static str, token: String },

    #[error("label {0:?} must be a single non-empty token")]
    BadLabel(String),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("body index {index} out of range for universe of {len} bodies")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("malformed snapshot: {0}")]
    Format(#[from] FormatError),

    #[error("snapshot i/o: {0}")]
    Io(#[from] io::Error),

    #[error("scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid run configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
