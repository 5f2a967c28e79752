//! Domain layer: the search tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod balance;
pub mod error;
pub mod snapshot;
pub mod traversal;
pub mod tree;

pub use arena::{Node, NodeArena, NodeId, Unlinked};
pub use error::{TreeError, TreeResult};
pub use snapshot::Snapshot;
pub use traversal::{Order, Traverse};
pub use tree::SearchTree;
