//! Hash capabilities for the merkle tree
//!
//! The tree is parameterized over a [`MerkleHasher`] chosen once at
//! construction; it never picks an algorithm itself. Two ready-made
//! capabilities are provided, and any `Fn(&[u8]) -> Vec<u8>` works directly.

use sha2::{Digest as _, Sha256};
use tiny_keccak::{Hasher, Keccak};

/// Deterministic map from an arbitrary byte sequence to a fixed-length digest.
///
/// The digest length is a property of the capability, not of the tree; every
/// call must return the same length.
pub trait MerkleHasher {
    /// Hash a byte sequence
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> MerkleHasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// SHA-256 hasher
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

/// Keccak256 hasher
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output.to_vec()
    }
}

/// Hash two node digests into their parent digest, left before right.
///
/// The digests are copied into a buffer allocated to exactly
/// `left.len() + right.len()` for this one combine; appending onto a shared
/// buffer could alias the backing storage of a digest another level still
/// holds.
pub fn hash_pair<H: MerkleHasher>(hasher: &H, left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(left.len() + right.len());
    joined.extend_from_slice(left);
    joined.extend_from_slice(right);
    hasher.hash(&joined)
}
