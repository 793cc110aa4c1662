//! Hash chain primitives.
//!
//! A hash chain starts from a seed and repeatedly applies a digest
//! function: `chain[0] = H(seed)`, `chain[i] = H(chain[i-1])`. Publishing
//! the last element (the tip) lets a counterparty later confirm that a
//! revealed element belongs to the chain with a single hash evaluation,
//! without ever learning the seed — a lightweight one-way authentication
//! primitive.
//!
//! All digest computations wrap established libraries — no custom
//! cryptography.

pub mod algorithm;
pub mod chain;
pub mod error;
pub mod verify;

pub use algorithm::HashAlgorithm;
pub use chain::HashChain;
pub use error::ChainError;
pub use verify::{verify, ChainAuthenticator};
