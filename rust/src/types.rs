//! Core types and data structures for BTree.
//!
//! This module contains the tree and node data structures and the constants
//! that bound the minimum degree.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest minimum degree a B-tree can be built with.
pub const MIN_DEGREE: usize = 2;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B-tree of minimum degree `t` holding a set of ordered keys.
///
/// Every node except the root holds between `t - 1` and `2t - 1` keys, and
/// every leaf sits at the same depth. The tree grows only at the root (when a
/// full root is split) and shrinks only at the root (when a merge empties it).
///
/// # Type Parameters
///
/// * `K` - Key type that must implement `Ord + Clone`
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(&20));
/// assert!(!tree.search(&25));
/// assert!(tree.delete(&20));
/// assert!(!tree.search(&20));
/// ```
///
/// # Performance Characteristics
///
/// - **Search**: O(t log_t n) comparisons in the worst case
/// - **Insertion**: O(t log_t n), one downward pass
/// - **Deletion**: O(t log_t n), one downward pass plus predecessor walks
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Minimum degree `t`, fixed at construction.
    pub(crate) min_degree: usize,
    /// The root node. Owns every other node in the tree.
    pub(crate) root: Node<K>,
}

/// A single B-tree node.
///
/// Leaves have no children. Internal nodes always have exactly one more child
/// than keys, and `children[i]` holds the keys strictly between `keys[i - 1]`
/// and `keys[i]`. The minimum degree lives on the owning [`BTree`] and is
/// passed to the node-level bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Strictly increasing keys.
    pub(crate) keys: Vec<K>,
    /// Child subtrees; empty for leaves.
    pub(crate) children: Vec<Node<K>>,
}
