//! INSERT operations for BTree.
//!
//! Insertion is a single downward pass that splits every full node before
//! entering it, so the leaf that finally receives the key always has room.
//! The tree only ever grows in height at the root.

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};

impl<K: Ord + Clone> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Returns `true` if the key was added and `false` if it was already
    /// present. A rejected duplicate leaves the tree exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        // Checked up front: the proactive splits below would otherwise
        // reshape the tree before the duplicate is discovered.
        if self.search(&key) {
            return false;
        }

        if self.root.is_full(self.min_degree) {
            self.grow_root();
        }
        Self::insert_non_full(&mut self.root, key, self.min_degree);
        true
    }

    /// Insert with invariant checks before and after, reporting duplicates as errors.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;

        if !self.insert(key) {
            return Err(BTreeError::DuplicateKey);
        }

        self.validate_for_operation("insert")
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Push the full root down under a fresh root and split it.
    fn grow_root(&mut self) {
        let old_root = std::mem::replace(&mut self.root, Node::new_leaf(self.min_degree));
        self.root.children.push(old_root);
        self.root.split_child(0, self.min_degree);

        tracing::trace!(
            target: "btree::grow",
            root_keys = self.root.keys.len(),
            "split full root, tree height increased"
        );
    }

    fn insert_non_full(node: &mut Node<K>, key: K, t: usize) {
        let mut index = match node.find_key(&key) {
            Ok(_) => unreachable!("duplicate keys are rejected before descending"),
            Err(index) => index,
        };

        if node.is_leaf() {
            node.keys.insert(index, key);
            return;
        }

        if node.children[index].is_full(t) {
            node.split_child(index, t);
            if node.keys[index] < key {
                index += 1;
            }
        }
        Self::insert_non_full(&mut node.children[index], key, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_root_leaf_keeps_order() {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12] {
            assert!(tree.insert(key));
        }
        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.keys, vec![5, 6, 10, 12, 20]);
    }

    #[test]
    fn test_full_root_splits_on_next_insert() {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30] {
            tree.insert(key);
        }
        // [5, 6, 10, 12, 20] split around 10 before 30 went in
        assert_eq!(tree.root.keys, vec![10]);
        assert_eq!(tree.root.children[0].keys, vec![5, 6]);
        assert_eq!(tree.root.children[1].keys, vec![12, 20, 30]);
    }

    #[test]
    fn test_split_child_shifts_target_index() {
        let mut tree = BTree::new(2).unwrap();
        for key in 1..=5 {
            tree.insert(key);
        }
        // 1,2,3 -> root split on 4: [2] / [1] [3,4]; 5 fills the right leaf
        assert_eq!(tree.root.keys, vec![2]);
        assert_eq!(tree.root.children[1].keys, vec![3, 4, 5]);

        // Right leaf is full: it splits around 4 and 6 lands right of it
        tree.insert(6);
        assert_eq!(tree.root.keys, vec![2, 4]);
        assert_eq!(tree.root.children[2].keys, vec![5, 6]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_duplicate_insert_leaves_tree_unchanged() {
        let mut tree = BTree::new(2).unwrap();
        for key in [1, 2, 3] {
            tree.insert(key);
        }
        let before = tree.root.clone();

        // Root is full: a naive pass would split it before finding the duplicate
        assert!(!tree.insert(2));
        assert_eq!(tree.root, before);
    }

    #[test]
    fn test_try_insert_reports_duplicate() {
        let mut tree = BTree::new(2).unwrap();
        assert_eq!(tree.try_insert(4), Ok(()));
        assert_eq!(tree.try_insert(4), Err(BTreeError::DuplicateKey));
    }
}
