//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains minimum degree validation, the tree and node
//! constructors, and the default implementations.

use crate::error::{BTreeError, BTreeResult, InitResult};
use crate::types::{BTree, Node, MIN_DEGREE};

/// Default minimum degree for B-tree nodes
pub const DEFAULT_MIN_DEGREE: usize = 16;

/// Upper bound on the key capacity reserved up front for a fresh node.
const MAX_PREALLOCATED_KEYS: usize = 2 * DEFAULT_MIN_DEGREE - 1;

impl<K> BTree<K> {
    /// Create an empty B-tree with the specified minimum degree.
    ///
    /// # Arguments
    ///
    /// * `min_degree` - Minimum degree `t`; nodes hold at most `2t - 1` keys
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if `min_degree >= 2` and `2 * min_degree` fits in a
    /// `usize`, `Err(BTreeError::InvalidConfiguration)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(min_degree: usize) -> InitResult<Self> {
        validation::validate_min_degree(min_degree)?;

        Ok(Self {
            min_degree,
            root: Node::new_leaf(min_degree),
        })
    }

    /// Create a B-tree with the default minimum degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_MIN_DEGREE)`.
    pub fn with_default_degree() -> InitResult<Self> {
        Self::new(DEFAULT_MIN_DEGREE)
    }

    /// Build a tree around a hand-assembled root, for pinning down exact shapes in tests.
    #[cfg(test)]
    pub(crate) fn from_root(min_degree: usize, root: Node<K>) -> Self {
        Self { min_degree, root }
    }
}

impl<K> Node<K> {
    /// Creates an empty leaf for a tree of the given minimum degree.
    pub fn new_leaf(min_degree: usize) -> Self {
        // Small degrees get room for a full node; wide nodes grow on demand
        let capacity = min_degree
            .saturating_mul(2)
            .saturating_sub(1)
            .min(MAX_PREALLOCATED_KEYS);
        Self {
            keys: Vec::with_capacity(capacity),
            children: Vec::new(),
        }
    }

    /// Creates a node from already-partitioned keys and children.
    ///
    /// An empty `children` vector makes a leaf.
    pub(crate) fn from_parts(keys: Vec<K>, children: Vec<Node<K>>) -> Self {
        Self { keys, children }
    }
}

impl<K> Default for BTree<K> {
    /// Create a B-tree with the default minimum degree.
    fn default() -> Self {
        Self {
            min_degree: DEFAULT_MIN_DEGREE,
            root: Node::new_leaf(DEFAULT_MIN_DEGREE),
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a minimum degree can form a B-tree.
    ///
    /// The degree must be at least [`MIN_DEGREE`], and the node capacity
    /// `2 * min_degree - 1` must be representable.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(BTreeError::InvalidConfiguration)` otherwise.
    pub fn validate_min_degree(min_degree: usize) -> BTreeResult<()> {
        if min_degree < MIN_DEGREE {
            return Err(BTreeError::invalid_min_degree(min_degree, MIN_DEGREE));
        }
        if min_degree.checked_mul(2).is_none() {
            return Err(BTreeError::min_degree_too_large(min_degree));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_construction() {
        let tree = BTree::<i32>::new(3).unwrap();
        assert_eq!(tree.min_degree, 3);
        assert!(tree.root.keys.is_empty());
        assert!(tree.root.children.is_empty());
    }

    #[test]
    fn test_btree_invalid_min_degree() {
        for degree in [0, 1] {
            let result = BTree::<i32>::new(degree);
            assert!(matches!(result, Err(BTreeError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_btree_oversized_min_degree() {
        for degree in [usize::MAX / 2 + 1, usize::MAX] {
            let result = BTree::<u64>::new(degree);
            assert!(matches!(result, Err(BTreeError::InvalidConfiguration(_))));
        }

        // Largest representable degree: nodes never fill, so the root stays a leaf
        let mut tree = BTree::<u64>::new(usize::MAX / 2).unwrap();
        assert_eq!(tree.max_keys(), usize::MAX - 2);
        for key in 0..100 {
            assert!(tree.insert(key));
        }
        assert!(tree.is_leaf_root());
        assert!(tree.delete(&50));
        assert_eq!(tree.len(), 99);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_btree_default() {
        let tree = BTree::<i32>::default();
        assert_eq!(tree.min_degree, DEFAULT_MIN_DEGREE);
        let tree = BTree::<i32>::with_default_degree().unwrap();
        assert_eq!(tree.min_degree, DEFAULT_MIN_DEGREE);
    }

    #[test]
    fn test_leaf_construction() {
        let leaf = Node::<i32>::new_leaf(4);
        assert!(leaf.keys.is_empty());
        assert!(leaf.keys.capacity() >= 7);

        // Wide nodes do not reserve their full capacity up front
        let leaf = Node::<u64>::new_leaf(1 << 61);
        assert!(leaf.is_leaf());
        assert!(leaf.keys.capacity() < 1 << 20);
    }

    #[test]
    fn test_validation() {
        assert!(validation::validate_min_degree(2).is_ok());
        assert!(validation::validate_min_degree(16).is_ok());
        assert!(validation::validate_min_degree(1).is_err());
        assert!(validation::validate_min_degree(1 << 61).is_ok());
        assert!(validation::validate_min_degree(usize::MAX / 2 + 1).is_err());
    }
}
