//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, the in-order key dump used by
//! tests, and a printable structure dump for debugging.

use crate::error::{BTreeError, BTreeResult, BTreeResultExt};
use crate::types::{BTree, Node};
use std::fmt::Debug;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTree<K> {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies key ordering and separator bounds, key-count bounds for every
    /// non-root node, child counts for internal nodes, and that every leaf
    /// sits at the same depth.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.root.is_empty() && !self.root.is_leaf() {
            return Err("Root has no keys but still has children".to_string());
        }

        let mut leaf_depth = None;
        self.check_node_invariants(&self.root, None, None, 0, true, &mut leaf_depth)
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed()
            .map_err(BTreeError::DataIntegrityError)
            .with_operation(operation)
    }

    /// Recursively check invariants for a node and its children.
    fn check_node_invariants(
        &self,
        node: &Node<K>,
        min_key: Option<&K>,
        max_key: Option<&K>,
        depth: usize,
        is_root: bool,
        leaf_depth: &mut Option<usize>,
    ) -> Result<(), String> {
        // Check that keys are strictly increasing
        for i in 1..node.keys.len() {
            if node.keys[i - 1] >= node.keys[i] {
                return Err(format!(
                    "Keys out of order at depth {} index {}",
                    depth, i
                ));
            }
        }

        // Check key bounds inherited from ancestors
        if let (Some(min), Some(first)) = (min_key, node.keys.first()) {
            if first <= min {
                return Err(format!("Key below separator bound at depth {}", depth));
            }
        }
        if let (Some(max), Some(last)) = (max_key, node.keys.last()) {
            if last >= max {
                return Err(format!("Key above separator bound at depth {}", depth));
            }
        }

        // Check capacity constraints
        if node.keys.len() > self.max_keys() {
            return Err(format!(
                "Node at depth {} holds {} keys (max {})",
                depth,
                node.keys.len(),
                self.max_keys()
            ));
        }
        if !is_root && node.keys.len() < self.min_keys() {
            return Err(format!(
                "Non-root node at depth {} holds {} keys (min {})",
                depth,
                node.keys.len(),
                self.min_keys()
            ));
        }

        if node.is_leaf() {
            return match *leaf_depth {
                None => {
                    *leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(format!(
                    "Leaf at depth {} but earlier leaves sit at depth {}",
                    depth, expected
                )),
            };
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(format!(
                "Internal node at depth {} has {} keys but {} children",
                depth,
                node.keys.len(),
                node.children.len()
            ));
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_min = if i == 0 { min_key } else { Some(&node.keys[i - 1]) };
            let child_max = if i == node.keys.len() {
                max_key
            } else {
                Some(&node.keys[i])
            };
            self.check_node_invariants(child, child_min, child_max, depth + 1, false, leaf_depth)?;
        }

        Ok(())
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> BTree<K> {
    /// Returns all keys in sorted order (for testing/debugging).
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::collect_keys(&self.root, &mut keys);
        keys
    }

    fn collect_keys<'a>(node: &'a Node<K>, keys: &mut Vec<&'a K>) {
        if node.is_leaf() {
            keys.extend(node.keys.iter());
            return;
        }
        for (i, child) in node.children.iter().enumerate() {
            Self::collect_keys(child, keys);
            if let Some(key) = node.keys.get(i) {
                keys.push(key);
            }
        }
    }

    /// Returns the depth of every leaf, left to right (for testing/debugging).
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        Self::collect_leaf_depths(&self.root, 0, &mut depths);
        depths
    }

    fn collect_leaf_depths(node: &Node<K>, depth: usize, depths: &mut Vec<usize>) {
        if node.is_leaf() {
            depths.push(depth);
        }
        for child in &node.children {
            Self::collect_leaf_depths(child, depth + 1, depths);
        }
    }
}

impl<K: Debug> BTree<K> {
    /// Render the tree one node per line, indented by depth.
    pub fn structure_dump(&self) -> String {
        let mut out = format!("BTree[t={}]:\n", self.min_degree);
        Self::dump_node(&self.root, 1, &mut out);
        out
    }

    fn dump_node(node: &Node<K>, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let kind = if node.is_leaf() { "Leaf" } else { "Branch" };
        out.push_str(&format!("{}{}{:?}\n", indent, kind, node.keys));
        for child in &node.children {
            Self::dump_node(child, depth + 1, out);
        }
    }
}
