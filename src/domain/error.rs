//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised by the "must exist" accessors of the tree.
///
/// Lookups that have a boolean success path (`contains`, `remove`) never
/// produce these; absence is reported as `false` there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("item {0} was not found in the tree")]
    NotFound(String),

    #[error("out of range: requested {requested}, available {available}")]
    OutOfRange { requested: usize, available: usize },

    #[error("iterator is not positioned on an element")]
    InvalidIteratorState,

    /// Reserved for a rejecting duplicate policy; the tree silently drops
    /// duplicates and never returns this.
    #[error("item {0} is already in the tree")]
    Duplicate(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
