use tracing::instrument;

use crate::domain::error::{TreeError, TreeResult};

/// Point-in-time copy of a tree's preorder sequence.
///
/// Mutating the tree after the snapshot was taken has no effect on it.
/// Positioned before the first element until [`advance`](Self::advance)
/// is called.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    items: Vec<T>,
    position: Option<usize>,
}

impl<T> Snapshot<T> {
    #[instrument(level = "trace", skip(items))]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: None,
        }
    }

    /// Moves to the next element; `false` once past the end.
    pub fn advance(&mut self) -> bool {
        let next = self
            .position
            .map_or(0, |p| (p + 1).min(self.items.len()));
        self.position = Some(next);
        next < self.items.len()
    }

    pub fn current(&self) -> TreeResult<&T> {
        self.position
            .and_then(|p| self.items.get(p))
            .ok_or(TreeError::InvalidIteratorState)
    }

    pub fn reset(&mut self) {
        self.position = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current().ok().cloned()
        } else {
            None
        }
    }
}
