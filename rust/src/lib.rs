//! B-tree ordered index in Rust.
//!
//! This crate provides an in-memory B-tree of minimum degree `t` over a set of
//! totally ordered keys, supporting membership search, insertion and deletion.
//! Every node except the root holds between `t - 1` and `2t - 1` keys and all
//! leaves sit at the same depth. Insertion splits full nodes on the way down;
//! deletion borrows from or merges with siblings on the way down so that the
//! node it finally removes from never underflows.
//!
//! # Examples
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for key in 1..=10 {
//!     tree.insert(key);
//! }
//! assert!(tree.search(&7));
//! assert!(tree.delete(&7));
//! assert!(!tree.search(&7));
//! assert_eq!(tree.len(), 9);
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use construction::validation::validate_min_degree;
pub use construction::DEFAULT_MIN_DEGREE;
pub use error::{BTreeError, BTreeResult, BTreeResultExt, InitResult, ModifyResult};
pub use types::{BTree, Node, MIN_DEGREE};
