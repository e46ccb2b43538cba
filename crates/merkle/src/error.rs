//! Error types

use thiserror::Error;

/// Errors reported by merkle tree operations.
///
/// Only proof generation can fail; every other operation is total over its
/// domain. A failed call leaves the tree untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// The requested leaf index does not exist in the tree.
    #[error("leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of leaves at the time of the request
        leaf_count: usize,
    },
}
