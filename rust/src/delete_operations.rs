//! DELETE operations for BTree.
//!
//! Deletion is a single downward pass. Before descending into a child, the
//! pass makes sure the child holds at least `t` keys, borrowing from a sibling
//! or merging with one when it sits at the minimum. A key found in an internal
//! node is replaced by its predecessor or successor, or pushed down by a merge.
//! When a merge empties the root, its only child becomes the new root.

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};

impl<K: Ord + Clone> BTree<K> {
    /// Remove a key from the tree.
    ///
    /// Returns `true` if the key was found and removed, `false` if it was
    /// absent. Deleting an absent key leaves the tree exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        // Checked up front: the pre-emptive merges below would otherwise
        // reshape the tree on the way to a key that is not there.
        if !self.search(key) {
            return false;
        }

        let removed = Self::delete_recursive(&mut self.root, key, self.min_degree);
        self.collapse_root_if_needed();
        removed
    }

    /// Remove with invariant checks before and after, reporting absence as an error.
    pub fn try_delete(&mut self, key: &K) -> ModifyResult<()> {
        self.validate_for_operation("delete")?;

        if !self.delete(key) {
            return Err(BTreeError::KeyNotFound);
        }

        self.validate_for_operation("delete")
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    fn delete_recursive(node: &mut Node<K>, key: &K, t: usize) -> bool {
        match node.find_key(key) {
            Ok(index) if node.is_leaf() => {
                node.keys.remove(index);
                true
            }
            Ok(index) => {
                Self::delete_from_internal(node, index, key, t);
                true
            }
            Err(_) if node.is_leaf() => false,
            Err(index) => {
                let index = Self::ensure_child_can_lose_key(node, index, t);
                Self::delete_recursive(&mut node.children[index], key, t)
            }
        }
    }

    /// Remove `keys[index]` (equal to `key`) from an internal node.
    fn delete_from_internal(node: &mut Node<K>, index: usize, key: &K, t: usize) {
        if node.children[index].can_donate(t) {
            // Replace with the predecessor, then delete it from the left subtree
            let predecessor = match node.children[index].max_key() {
                Some(predecessor) => predecessor.clone(),
                None => unreachable!("non-empty subtree has a maximum key"),
            };
            node.keys[index] = predecessor.clone();
            Self::delete_recursive(&mut node.children[index], &predecessor, t);
        } else if node.children[index + 1].can_donate(t) {
            // Replace with the successor, then delete it from the right subtree
            let successor = match node.children[index + 1].min_key() {
                Some(successor) => successor.clone(),
                None => unreachable!("non-empty subtree has a minimum key"),
            };
            node.keys[index] = successor.clone();
            Self::delete_recursive(&mut node.children[index + 1], &successor, t);
        } else {
            // Both neighbours are minimal: push the key down into their merge
            node.merge_children(index);
            Self::delete_recursive(&mut node.children[index], key, t);
        }
    }

    /// Make sure `children[index]` holds at least `t` keys before descending into it.
    ///
    /// Returns the index of the child to descend into, which moves one to the
    /// left when the child had to be merged into its left sibling.
    fn ensure_child_can_lose_key(node: &mut Node<K>, index: usize, t: usize) -> usize {
        if !node.children[index].is_minimal(t) {
            return index;
        }

        if index > 0 && node.children[index - 1].can_donate(t) {
            node.borrow_from_left(index, t);
            index
        } else if index < node.keys.len() && node.children[index + 1].can_donate(t) {
            node.borrow_from_right(index, t);
            index
        } else if index < node.keys.len() {
            node.merge_children(index);
            index
        } else {
            node.merge_children(index - 1);
            index - 1
        }
    }

    /// Replace an empty internal root with its only child.
    fn collapse_root_if_needed(&mut self) {
        if self.root.is_empty() && !self.root.is_leaf() {
            debug_assert_eq!(self.root.children.len(), 1);
            let child = self.root.children.remove(0);
            self.root = child;

            tracing::trace!(
                target: "btree::shrink",
                root_keys = self.root.keys.len(),
                "collapsed empty root, tree height decreased"
            );
        }
    }
}
