//! GET operations for BTree.
//!
//! This module contains the read-only operations: membership search and the
//! smallest / largest key lookups.

use crate::types::{BTree, Node};

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Returns true if `key` is present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&2));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        Self::search_recursive(&self.root, key)
    }

    /// Alias for [`search`](Self::search), matching the std collections naming.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key)
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.min_key()
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.max_key()
    }

    // ============================================================================
    // HELPERS FOR GET OPERATIONS
    // ============================================================================

    fn search_recursive(node: &Node<K>, key: &K) -> bool {
        match node.find_key(key) {
            Ok(_) => true,
            Err(_) if node.is_leaf() => false,
            Err(index) => Self::search_recursive(&node.children[index], key),
        }
    }
}
