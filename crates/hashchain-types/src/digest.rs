use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::error::TypeError;

/// Output of one hash-function evaluation.
///
/// A `Digest` is an immutable byte sequence whose length is determined
/// entirely by the algorithm that produced it (20 bytes for SHA-1, 32 for
/// SHA-256 or BLAKE3, up to 64 for SHA-512). Two digests are equal iff
/// their bytes are equal.
///
/// Serde serializes a digest as its base64 transport form, not as a raw
/// byte array.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(Box<[u8]>);

impl Digest {
    /// Wrap raw hash output.
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length digest.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..self.0.len().min(4)])
    }

    /// Parse from a hex string of exactly `expected_len` bytes.
    pub fn from_hex(s: &str, expected_len: usize) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != expected_len {
            return Err(TypeError::LengthMismatch {
                expected: expected_len,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.into()))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl<const N: usize> From<[u8; N]> for Digest {
    fn from(bytes: [u8; N]) -> Self {
        Self(Box::new(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encoding::encode(self))
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        encoding::decode_any(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_byte_wise() {
        let a = Digest::from_bytes(vec![1, 2, 3, 4]);
        let b = Digest::from_bytes(vec![1, 2, 3, 4]);
        let c = Digest::from_bytes(vec![1, 2, 3, 5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lengths_differ_by_source() {
        let short = Digest::from_bytes(vec![0u8; 20]);
        let long = Digest::from_bytes(vec![0u8; 64]);
        assert_eq!(short.len(), 20);
        assert_eq!(long.len(), 64);
        assert_ne!(short, long);
    }

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::from_bytes(vec![0xde, 0xad, 0xbe, 0xef, 0x00]);
        let parsed = Digest::from_hex(&digest.to_hex(), 5).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = Digest::from_hex("deadbeef", 32).unwrap_err();
        assert_eq!(
            err,
            TypeError::LengthMismatch {
                expected: 32,
                actual: 4
            }
        );
    }

    #[test]
    fn from_hex_rejects_bad_characters() {
        let err = Digest::from_hex("not hex at all", 7).unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn display_is_full_hex() {
        let digest = Digest::from_bytes(vec![0xab; 32]);
        assert_eq!(format!("{digest}"), "ab".repeat(32));
    }

    #[test]
    fn debug_is_short() {
        let digest = Digest::from_bytes(vec![0x12, 0x34, 0x56, 0x78, 0x9a]);
        assert_eq!(format!("{digest:?}"), "Digest(12345678)");
    }

    #[test]
    fn serde_roundtrip_is_base64_text() {
        let digest = Digest::from_bytes(vec![0u8; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        assert!(json.starts_with('"'));
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_array() {
        let digest = Digest::from([7u8; 28]);
        assert_eq!(digest.len(), 28);
        assert_eq!(digest.as_bytes(), &[7u8; 28]);
    }
}
