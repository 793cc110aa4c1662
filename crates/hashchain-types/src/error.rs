use thiserror::Error;

/// Errors produced by digest parsing and transport decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("malformed base64: {0}")]
    MalformedEncoding(String),

    #[error("decoded length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}
