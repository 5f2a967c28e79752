//! Arena-backed binary search tree.
//!
//! [`SearchTree`] is an ordered collection of distinct values supporting
//! insertion, deletion, membership queries, four traversal orders,
//! positional access over the preorder sequence and an explicit
//! [`balance`](SearchTree::balance) that rebuilds the tree with minimal
//! height.
//!
//! ```
//! use bstree::SearchTree;
//!
//! let mut tree: SearchTree<i32> = [40, 11, 62, 43, 34, 16, 10, 63].into_iter().collect();
//! assert_eq!(tree.sort(), vec![10, 11, 16, 34, 40, 43, 62, 63]);
//! assert!(tree.remove(&43));
//! assert_eq!(tree.len(), 7);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{Order, SearchTree, Snapshot, TreeError, TreeResult};
