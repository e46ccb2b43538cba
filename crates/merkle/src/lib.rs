//! Binary merkle tree for ordered-batch commitment
//!
//! This crate commits to an ordered list of byte items with a single root
//! digest and produces compact inclusion proofs for individual positions.
//! Key points:
//! - Positional leaves: identity is the insertion index, not the content
//! - Pluggable hashing: the tree is generic over a [`MerkleHasher`]
//!   capability supplied at construction
//! - Deterministic shape: odd-width levels duplicate their last node, so the
//!   root is a pure function of the ordered leaves and the hash capability

mod error;
mod hasher;
mod proof;
mod tree;

pub use error::MerkleError;
pub use hasher::{hash_pair, Keccak256Hasher, MerkleHasher, Sha256Hasher};
pub use proof::MerkleProof;
pub use tree::{Digest, MerkleTree};
