//! Base64 transport encoding for digests.
//!
//! Digests cross process boundaries (command-line arguments, one-per-line
//! chain listings) as standard RFC 4648 base64 with padding. Decoding is
//! strict: non-alphabet characters and decoded lengths that do not match
//! the caller's expectation are both rejected, so a digest that survives
//! [`decode`] is structurally valid for its algorithm.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::digest::Digest;
use crate::error::TypeError;

/// Encode a digest as base64 text.
pub fn encode(digest: &Digest) -> String {
    STANDARD.encode(digest.as_bytes())
}

/// Decode base64 text into a digest of exactly `expected_len` bytes.
///
/// Leading and trailing whitespace is tolerated so piped chain lines can
/// be fed back in unmodified.
pub fn decode(text: &str, expected_len: usize) -> Result<Digest, TypeError> {
    let digest = decode_any(text)?;
    if digest.len() != expected_len {
        return Err(TypeError::LengthMismatch {
            expected: expected_len,
            actual: digest.len(),
        });
    }
    Ok(digest)
}

/// Decode base64 text without a length expectation.
pub(crate) fn decode_any(text: &str) -> Result<Digest, TypeError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| TypeError::MalformedEncoding(e.to_string()))?;
    Ok(Digest::from_bytes(bytes))
}
