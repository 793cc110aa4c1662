use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};

use hashchain_types::Digest;

use crate::error::ChainError;

/// A digest function known to the registry.
///
/// Each algorithm resolves to a pure one-shot hash function with a fixed
/// output length. The registry is a compile-time enum: immutable,
/// process-wide, no initialization or teardown. Names parse
/// case-insensitively, with or without the conventional dash
/// (`sha256` / `SHA-256`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm in the registry, in listing order.
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Blake3,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Blake3 => "blake3",
        }
    }

    /// Fixed digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
            Self::Blake3 => 32,
        }
    }

    /// One-shot digest of `data`.
    pub fn digest(&self, data: &[u8]) -> Digest {
        match self {
            Self::Sha1 => Digest::from(Sha1::digest(data).to_vec()),
            Self::Sha224 => Digest::from(Sha224::digest(data).to_vec()),
            Self::Sha256 => Digest::from(Sha256::digest(data).to_vec()),
            Self::Sha384 => Digest::from(Sha384::digest(data).to_vec()),
            Self::Sha512 => Digest::from(Sha512::digest(data).to_vec()),
            Self::Blake3 => Digest::from(*blake3::hash(data).as_bytes()),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "blake3" => Ok(Self::Blake3),
            _ => Err(ChainError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
