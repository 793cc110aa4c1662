//! One-step preimage verification.
//!
//! [`verify`] is the stateless primitive: does `candidate` hash to `tip`?
//! [`ChainAuthenticator`] layers the caller-side protocol on top — it
//! tracks the currently trusted tip across an authentication episode and
//! advances it one link per accepted reveal, walking the chain backward.

use hashchain_types::Digest;

use crate::algorithm::HashAlgorithm;
use crate::error::ChainError;

/// Check that `candidate` is the immediate preimage of `tip`.
///
/// Computes `H(candidate)` and compares it byte-for-byte against `tip`.
/// A clean mismatch is `Ok(false)`; a digest whose length does not match
/// the algorithm's output size is a structural error, distinct from
/// verification failure.
pub fn verify(
    candidate: &Digest,
    tip: &Digest,
    algorithm: HashAlgorithm,
) -> Result<bool, ChainError> {
    let expected = algorithm.output_len();
    for digest in [candidate, tip] {
        if digest.len() != expected {
            return Err(ChainError::DigestLength {
                expected,
                actual: digest.len(),
            });
        }
    }
    Ok(&algorithm.digest(candidate.as_bytes()) == tip)
}

/// Walks a chain backward, one reveal at a time.
///
/// Seeded with a published tip, the authenticator accepts a candidate only
/// if it hashes to the currently trusted tip; the accepted candidate then
/// becomes the trusted tip for the next round. A failed check never
/// advances the state, so replayed or unrelated digests cannot burn a
/// link.
#[derive(Clone, Debug)]
pub struct ChainAuthenticator {
    algorithm: HashAlgorithm,
    trusted: Digest,
    accepted: usize,
}

impl ChainAuthenticator {
    /// Start an episode from a published tip.
    pub fn new(algorithm: HashAlgorithm, tip: Digest) -> Result<Self, ChainError> {
        if tip.len() != algorithm.output_len() {
            return Err(ChainError::DigestLength {
                expected: algorithm.output_len(),
                actual: tip.len(),
            });
        }
        Ok(Self {
            algorithm,
            trusted: tip,
            accepted: 0,
        })
    }

    /// Present the next reveal.
    ///
    /// Returns `Ok(true)` and advances the trusted tip iff the candidate
    /// hashes to it.
    pub fn accept(&mut self, candidate: &Digest) -> Result<bool, ChainError> {
        if verify(candidate, &self.trusted, self.algorithm)? {
            self.trusted = candidate.clone();
            self.accepted += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The digest the next reveal must hash to.
    pub fn trusted_tip(&self) -> &Digest {
        &self.trusted
    }

    /// Number of reveals accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// The episode's algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}
