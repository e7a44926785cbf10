//! Node implementation for BTree.
//!
//! This module contains the node-level primitives the tree algorithms are
//! built from: key lookup, fullness checks, splitting a full child, merging
//! two minimal children, and rotating a key through the parent to borrow
//! from a sibling. Every primitive operating on children is called on the
//! parent, since it has to move a separator key as well.

use crate::types::Node;

impl<K> Node<K> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Maximum number of keys a node can hold in a tree of minimum degree `t` (2t - 1).
    pub fn max_keys(min_degree: usize) -> usize {
        2 * min_degree - 1
    }

    /// Minimum number of keys a non-root node must hold (t - 1).
    pub fn min_keys(min_degree: usize) -> usize {
        min_degree - 1
    }

    /// Returns true if this node cannot absorb another key without splitting.
    pub fn is_full(&self, min_degree: usize) -> bool {
        self.keys.len() >= Self::max_keys(min_degree)
    }

    /// Returns true if this node sits exactly at the minimum key count.
    pub fn is_minimal(&self, min_degree: usize) -> bool {
        self.keys.len() == Self::min_keys(min_degree)
    }

    /// Returns true if this node can give up a key and stay at or above the minimum.
    pub fn can_donate(&self, min_degree: usize) -> bool {
        self.keys.len() >= min_degree
    }

    /// Get a reference to the keys in this node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Get a reference to the children of this node.
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    // ============================================================================
    // PREDECESSOR / SUCCESSOR WALKS
    // ============================================================================

    /// Largest key in the subtree rooted here, found by following rightmost children.
    pub fn max_key(&self) -> Option<&K> {
        let mut current = self;
        while let Some(last) = current.children.last() {
            current = last;
        }
        current.keys.last()
    }

    /// Smallest key in the subtree rooted here, found by following leftmost children.
    pub fn min_key(&self) -> Option<&K> {
        let mut current = self;
        while let Some(first) = current.children.first() {
            current = first;
        }
        current.keys.first()
    }

    // ============================================================================
    // SPLIT
    // ============================================================================

    /// Split the full child at `index`, promoting its median key into this node.
    ///
    /// The child keeps keys `0..t-1` (and its first `t` children); a new right
    /// sibling at `index + 1` takes keys `t..2t-1` (and the last `t` children).
    pub(crate) fn split_child(&mut self, index: usize, t: usize) {
        let child = &mut self.children[index];
        assert!(
            child.is_full(t),
            "split_child called on a child with {} keys (max {})",
            child.keys.len(),
            Self::max_keys(t)
        );

        let right_keys = child.keys.split_off(t);
        let median = child.keys.remove(t - 1);
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        let sibling = Node::from_parts(right_keys, right_children);

        tracing::trace!(
            target: "btree::split",
            child_index = index,
            left_keys = child.keys.len(),
            right_keys = sibling.keys.len(),
            leaf = sibling.is_leaf(),
            "split full child"
        );

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
    }

    // ============================================================================
    // MERGE
    // ============================================================================

    /// Merge the child at `index + 1` and the separator `keys[index]` into the child at `index`.
    ///
    /// The right child is dropped, and this node loses one key and one child.
    pub(crate) fn merge_children(&mut self, index: usize) {
        assert!(
            index < self.keys.len(),
            "merge_children index {} out of range for {} keys",
            index,
            self.keys.len()
        );

        let separator = self.keys.remove(index);
        let mut right = self.children.remove(index + 1);
        let left = &mut self.children[index];
        left.keys.push(separator);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);

        tracing::trace!(
            target: "btree::merge",
            child_index = index,
            merged_keys = left.keys.len(),
            parent_keys = self.keys.len(),
            "merged child with right sibling"
        );
    }

    // ============================================================================
    // BORROWING (ROTATION)
    // ============================================================================

    /// Move one key from the left sibling of `children[index]` into it through the parent.
    ///
    /// The separator `keys[index - 1]` moves down to the front of the child, the
    /// left sibling's last key moves up to replace it, and the sibling's last
    /// child (if any) becomes the child's first child.
    pub(crate) fn borrow_from_left(&mut self, index: usize, t: usize) {
        assert!(index > 0, "child 0 has no left sibling");
        let (before, after) = self.children.split_at_mut(index);
        let left = &mut before[index - 1];
        let child = &mut after[0];
        assert!(left.can_donate(t), "left sibling has no spare key");

        let moved_key = left.keys.remove(left.keys.len() - 1);
        let separator = std::mem::replace(&mut self.keys[index - 1], moved_key);
        child.keys.insert(0, separator);
        if !left.is_leaf() {
            let moved_child = left.children.remove(left.children.len() - 1);
            child.children.insert(0, moved_child);
        }

        tracing::trace!(
            target: "btree::borrow",
            child_index = index,
            direction = "left",
            child_keys = child.keys.len(),
            sibling_keys = left.keys.len(),
            "borrowed key from left sibling"
        );
    }

    /// Move one key from the right sibling of `children[index]` into it through the parent.
    ///
    /// The separator `keys[index]` moves down to the end of the child, the right
    /// sibling's first key moves up to replace it, and the sibling's first
    /// child (if any) becomes the child's last child.
    pub(crate) fn borrow_from_right(&mut self, index: usize, t: usize) {
        assert!(
            index + 1 < self.children.len(),
            "child {} has no right sibling",
            index
        );
        let (before, after) = self.children.split_at_mut(index + 1);
        let child = &mut before[index];
        let right = &mut after[0];
        assert!(right.can_donate(t), "right sibling has no spare key");

        let moved_key = right.keys.remove(0);
        let separator = std::mem::replace(&mut self.keys[index], moved_key);
        child.keys.push(separator);
        if !right.is_leaf() {
            child.children.push(right.children.remove(0));
        }

        tracing::trace!(
            target: "btree::borrow",
            child_index = index,
            direction = "right",
            child_keys = child.keys.len(),
            sibling_keys = right.keys.len(),
            "borrowed key from right sibling"
        );
    }
}

impl<K: Ord> Node<K> {
    /// Locate `key` in this node.
    ///
    /// Returns `Ok(i)` if `keys[i] == key`, otherwise `Err(i)` where `i` is the
    /// first index whose key exceeds `key` (the child to descend into).
    pub fn find_key(&self, key: &K) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }
}
