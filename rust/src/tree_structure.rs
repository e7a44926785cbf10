//! Tree structure management operations for BTree.
//!
//! This module contains tree-level queries that look at the overall shape:
//! key and node counts, height, the degree-derived bounds, and clearing.

use crate::types::{BTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> BTree<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        Self::len_recursive(&self.root)
    }

    fn len_recursive(node: &Node<K>) -> usize {
        node.keys.len()
            + node
                .children
                .iter()
                .map(Self::len_recursive)
                .sum::<usize>()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the number of levels in the tree (1 for a lone root leaf).
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = &self.root;
        while let Some(first) = current.children.first() {
            height += 1;
            current = first;
        }
        height
    }

    /// Returns the total number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        Self::node_count_recursive(&self.root)
    }

    fn node_count_recursive(node: &Node<K>) -> usize {
        1 + node
            .children
            .iter()
            .map(Self::node_count_recursive)
            .sum::<usize>()
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.is_leaf()
    }

    /// The root node, for read-only inspection.
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Clear all keys from the tree, leaving an empty root leaf.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(self.min_degree);
    }

    // ============================================================================
    // DEGREE-DERIVED BOUNDS
    // ============================================================================

    /// The minimum degree `t` the tree was built with.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Maximum keys per node (2t - 1).
    pub fn max_keys(&self) -> usize {
        Node::<K>::max_keys(self.min_degree)
    }

    /// Minimum keys per non-root node (t - 1).
    pub fn min_keys(&self) -> usize {
        Node::<K>::min_keys(self.min_degree)
    }
}
