//! Inclusion proof verification

use serde::{Deserialize, Serialize};

use crate::hasher::{hash_pair, MerkleHasher};
use crate::tree::Digest;

/// Inclusion proof for a single leaf position.
///
/// Sibling digests ordered from the leaf level up to the level just below the
/// root. The proof does not carry the root; the verifier must already hold
/// the expected root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Sibling digests, leaf level first
    pub siblings: Vec<Digest>,
}

impl MerkleProof {
    /// Number of siblings in the proof (one per level below the root).
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// `true` for the single-leaf proof, which carries no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Recompute the root implied by `leaf` sitting at `index`.
    ///
    /// Concatenation order always puts the left node first: the current
    /// digest is the left input when `index` is even and the right input when
    /// it is odd, halving `index` at each level.
    pub fn compute_root<H: MerkleHasher>(&self, hasher: &H, leaf: &[u8], index: usize) -> Digest {
        let mut current = hasher.hash(leaf);
        let mut idx = index;
        for sibling in &self.siblings {
            current = if idx % 2 == 0 {
                hash_pair(hasher, &current, sibling)
            } else {
                hash_pair(hasher, sibling, &current)
            };
            idx /= 2;
        }
        current
    }

    /// Check the proof against an expected root.
    ///
    /// A pure predicate: a wrong index, a proof of the wrong length, or any
    /// tampered byte yields `false` rather than an error.
    pub fn verify<H: MerkleHasher>(
        &self,
        hasher: &H,
        leaf: &[u8],
        index: usize,
        expected_root: &[u8],
    ) -> bool {
        self.compute_root(hasher, leaf, index).as_slice() == expected_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Sha256Hasher;

    #[test]
    fn test_empty_proof_reduces_to_leaf_hash() {
        let proof = MerkleProof::default();
        assert!(proof.is_empty());

        let root = Sha256Hasher.hash(b"only");
        assert!(proof.verify(&Sha256Hasher, b"only", 0, &root));
    }

    #[test]
    fn test_wrong_length_proof_fails() {
        let root = Sha256Hasher.hash(b"only");
        let padded = MerkleProof {
            siblings: vec![vec![0u8; 32]],
        };
        assert!(!padded.verify(&Sha256Hasher, b"only", 0, &root));
    }

    #[test]
    fn test_compute_root_direction() {
        let hasher = Sha256Hasher;
        let left = hasher.hash(b"l");
        let right = hasher.hash(b"r");
        let parent = hash_pair(&hasher, &left, &right);

        let proof_for_left = MerkleProof {
            siblings: vec![right.clone()],
        };
        let proof_for_right = MerkleProof {
            siblings: vec![left.clone()],
        };
        assert_eq!(proof_for_left.compute_root(&hasher, b"l", 0), parent);
        assert_eq!(proof_for_right.compute_root(&hasher, b"r", 1), parent);
    }
}
