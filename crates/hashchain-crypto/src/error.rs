use thiserror::Error;

/// Errors from chain construction and verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("unknown hash algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("chain length must be at least 1")]
    InvalidLength,

    #[error("digest length mismatch: expected {expected} bytes, got {actual}")]
    DigestLength { expected: usize, actual: usize },
}
