//! Ordered merkle tree construction

use crate::error::MerkleError;
use crate::hasher::{hash_pair, MerkleHasher};
use crate::proof::MerkleProof;

/// Digest produced by the supplied hash capability.
pub type Digest = Vec<u8>;

/// Binary merkle tree over an append-only, ordered list of leaves.
///
/// Leaves keep the position they were added at; the root commits to the whole
/// ordered set. Every level pairs consecutive nodes left-to-right, and an
/// odd-width level duplicates its last node before pairing.
#[derive(Clone, Debug)]
pub struct MerkleTree<H> {
    /// Hash capability chosen at construction
    hasher: H,
    /// Ordered leaf data, append only
    leaves: Vec<Vec<u8>>,
    /// Node digests per level, leaf level first, root level last.
    /// Rebuilt from scratch on every append; each level is stored after the
    /// odd-width duplication, so `idx ^ 1` always addresses the pair mate.
    levels: Vec<Vec<Digest>>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Create an empty tree owning the supplied hash capability.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            leaves: Vec::new(),
            levels: Vec::new(),
        }
    }

    /// Append a leaf and rebuild the tree.
    ///
    /// The rebuild re-hashes every stored leaf, so one append costs O(n)
    /// hashes and n sequential appends cost O(n^2) total. Batch commitment is
    /// the target workload; use [`add_leaves`](Self::add_leaves) to amortize.
    pub fn add_leaf(&mut self, data: impl Into<Vec<u8>>) {
        self.leaves.push(data.into());
        self.rebuild();
    }

    /// Append a batch of leaves with a single rebuild at the end.
    ///
    /// Equivalent to repeated [`add_leaf`](Self::add_leaf) in every
    /// observable way.
    pub fn add_leaves<I, T>(&mut self, batch: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        self.leaves.extend(batch.into_iter().map(Into::into));
        self.rebuild();
    }

    /// Root digest over the current leaf set.
    ///
    /// `None` until the first leaf is added; an empty tree has no commitment,
    /// not a zero one.
    pub fn root(&self) -> Option<Digest> {
        self.levels.last().map(|level| level[0].clone())
    }

    /// Number of leaves added so far.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// `true` while no leaf has been added.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Leaf data at `index`, in insertion order.
    pub fn leaf(&self, index: usize) -> Option<&[u8]> {
        self.leaves.get(index).map(Vec::as_slice)
    }

    /// Generate the inclusion proof for the leaf at `index`.
    ///
    /// The proof holds one sibling digest per level below the root, leaf
    /// level first; a single-leaf tree yields an empty proof. The tree is not
    /// mutated.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        if index >= self.leaves.len() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaves.len(),
            });
        }

        let mut siblings = Vec::with_capacity(self.levels.len() - 1);
        let mut idx = index;
        for level in &self.levels[..self.levels.len() - 1] {
            siblings.push(level[idx ^ 1].clone());
            idx /= 2;
        }
        Ok(MerkleProof { siblings })
    }

    /// Verify `proof` for `leaf` at `index` against `expected_root` using the
    /// tree's own capability.
    pub fn verify_proof(
        &self,
        leaf: &[u8],
        index: usize,
        proof: &MerkleProof,
        expected_root: &[u8],
    ) -> bool {
        proof.verify(&self.hasher, leaf, index, expected_root)
    }

    /// Recompute every level from the stored leaves.
    fn rebuild(&mut self) {
        self.levels.clear();
        if self.leaves.is_empty() {
            return;
        }

        let mut level: Vec<Digest> = self
            .leaves
            .iter()
            .map(|leaf| self.hasher.hash(leaf))
            .collect();

        while level.len() > 1 {
            if level.len() % 2 == 1 {
                // odd width: the last node pairs with itself
                let last = level[level.len() - 1].clone();
                level.push(last);
            }
            let next: Vec<Digest> = level
                .chunks_exact(2)
                .map(|pair| hash_pair(&self.hasher, &pair[0], &pair[1]))
                .collect();
            self.levels.push(level);
            level = next;
        }
        self.levels.push(level);
    }
}

impl<H: MerkleHasher + Default> Default for MerkleTree<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Sha256Hasher;

    #[test]
    fn test_empty_tree_has_no_root() {
        let tree = MerkleTree::new(Sha256Hasher);
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_root_changes_on_every_add() {
        let mut tree = MerkleTree::new(Sha256Hasher);
        let mut roots = Vec::new();
        for i in 0..6u8 {
            tree.add_leaf(vec![i]);
            roots.push(tree.root().unwrap());
        }
        for pair in roots.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_leaves_keep_insertion_order() {
        let mut tree = MerkleTree::new(Sha256Hasher);
        tree.add_leaf(b"first".as_slice());
        tree.add_leaf(b"second".as_slice());
        assert_eq!(tree.leaf(0), Some(b"first".as_slice()));
        assert_eq!(tree.leaf(1), Some(b"second".as_slice()));
        assert_eq!(tree.leaf(2), None);
    }

    #[test]
    fn test_batch_add_matches_sequential_add() {
        let leaves = [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];

        let mut sequential = MerkleTree::new(Sha256Hasher);
        for leaf in &leaves {
            sequential.add_leaf(leaf.clone());
        }

        let mut batched = MerkleTree::new(Sha256Hasher);
        batched.add_leaves(leaves);

        assert_eq!(sequential.root(), batched.root());
        assert_eq!(sequential.leaf_count(), batched.leaf_count());
    }

    #[test]
    fn test_generate_proof_does_not_mutate() {
        let mut tree = MerkleTree::new(Sha256Hasher);
        tree.add_leaves([b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);

        let before = tree.root();
        let first = tree.generate_proof(1).unwrap();
        let second = tree.generate_proof(1).unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.root(), before);
    }

    #[test]
    fn test_out_of_range_reports_bounds() {
        let mut tree = MerkleTree::new(Sha256Hasher);
        tree.add_leaf(b"only".as_slice());
        assert_eq!(
            tree.generate_proof(1),
            Err(MerkleError::IndexOutOfRange {
                index: 1,
                leaf_count: 1
            })
        );
    }
}
