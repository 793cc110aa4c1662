use hashchain_types::Digest;

use crate::algorithm::HashAlgorithm;
use crate::error::ChainError;

/// An ordered sequence of digests derived from a single seed.
///
/// `chain[0] = H(seed)` and `chain[i] = H(chain[i-1])`. Given the last
/// element (the tip), recovering any earlier element requires inverting
/// the hash, while checking that a revealed element directly precedes the
/// tip takes one hash evaluation. Chains are immutable once built; every
/// link has the algorithm's fixed output length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashChain {
    algorithm: HashAlgorithm,
    links: Vec<Digest>,
}

impl HashChain {
    /// Build a chain of `length` links from `seed`.
    ///
    /// The seed may be any byte sequence, including empty. `length` must
    /// be at least 1; a length of exactly 1 yields the degenerate
    /// single-link chain `[H(seed)]`.
    ///
    /// Each step hashes exactly the previous link's bytes (the seed for
    /// the first), so the same `(seed, algorithm, length)` always produces
    /// the same chain.
    pub fn build(
        seed: &[u8],
        algorithm: HashAlgorithm,
        length: usize,
    ) -> Result<Self, ChainError> {
        if length == 0 {
            return Err(ChainError::InvalidLength);
        }
        let mut links = Vec::with_capacity(length);
        links.push(algorithm.digest(seed));
        for i in 1..length {
            let next = algorithm.digest(links[i - 1].as_bytes());
            links.push(next);
        }
        Ok(Self { algorithm, links })
    }

    /// Compute only the tip of a chain, in constant memory.
    ///
    /// Equivalent to `build(seed, algorithm, length)?.tip()` without
    /// materializing the intermediate links.
    pub fn tip_of(
        seed: &[u8],
        algorithm: HashAlgorithm,
        length: usize,
    ) -> Result<Digest, ChainError> {
        if length == 0 {
            return Err(ChainError::InvalidLength);
        }
        let mut current = algorithm.digest(seed);
        for _ in 1..length {
            current = algorithm.digest(current.as_bytes());
        }
        Ok(current)
    }

    /// The algorithm every link was produced under.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`: a chain has at least one link by construction.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The link at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<&Digest> {
        self.links.get(index)
    }

    /// The last link — the element safe to publish.
    pub fn tip(&self) -> &Digest {
        self.links.last().expect("chain holds at least one link")
    }

    /// Iterate links in chain order, `chain[0]` first.
    pub fn iter(&self) -> impl Iterator<Item = &Digest> {
        self.links.iter()
    }

    /// All links as a slice.
    pub fn links(&self) -> &[Digest] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic() {
        let a = HashChain::build(b"seed", HashAlgorithm::Sha256, 10).unwrap();
        let b = HashChain::build(b"seed", HashAlgorithm::Sha256, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn recurrence_holds_for_every_link() {
        for algo in HashAlgorithm::ALL {
            let chain = HashChain::build(b"recurrence", algo, 8).unwrap();
            assert_eq!(chain.get(0).unwrap(), &algo.digest(b"recurrence"));
            for i in 1..chain.len() {
                let expected = algo.digest(chain.get(i - 1).unwrap().as_bytes());
                assert_eq!(chain.get(i).unwrap(), &expected, "{algo} link {i}");
            }
        }
    }

    #[test]
    fn links_have_fixed_length() {
        let chain = HashChain::build(b"abc", HashAlgorithm::Sha512, 5).unwrap();
        assert_eq!(chain.len(), 5);
        for link in chain.iter() {
            assert_eq!(link.len(), 64);
        }
    }

    #[test]
    fn length_one_is_degenerate_but_valid() {
        let chain = HashChain::build(b"only", HashAlgorithm::Sha256, 1).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.tip(), &HashAlgorithm::Sha256.digest(b"only"));
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = HashChain::build(b"seed", HashAlgorithm::Sha256, 0).unwrap_err();
        assert_eq!(err, ChainError::InvalidLength);
    }

    #[test]
    fn empty_seed_is_allowed() {
        let chain = HashChain::build(b"", HashAlgorithm::Sha256, 3).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.get(0).unwrap(), &HashAlgorithm::Sha256.digest(b""));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = HashChain::build(b"seed-a", HashAlgorithm::Sha256, 4).unwrap();
        let b = HashChain::build(b"seed-b", HashAlgorithm::Sha256, 4).unwrap();
        assert_ne!(a.tip(), b.tip());
    }

    #[test]
    fn tip_of_agrees_with_build() {
        for length in [1, 2, 7, 100] {
            let chain = HashChain::build(b"stream", HashAlgorithm::Blake3, length).unwrap();
            let tip = HashChain::tip_of(b"stream", HashAlgorithm::Blake3, length).unwrap();
            assert_eq!(&tip, chain.tip());
        }
    }

    #[test]
    fn tip_of_rejects_zero_length() {
        let err = HashChain::tip_of(b"seed", HashAlgorithm::Sha256, 0).unwrap_err();
        assert_eq!(err, ChainError::InvalidLength);
    }

    #[test]
    fn iteration_is_in_chain_order() {
        let chain = HashChain::build(b"order", HashAlgorithm::Sha256, 4).unwrap();
        let collected: Vec<_> = chain.iter().collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0], chain.get(0).unwrap());
        assert_eq!(collected[3], chain.tip());
    }
}
