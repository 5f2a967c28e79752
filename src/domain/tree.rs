use std::fmt;

use tracing::{debug, instrument};

use crate::domain::arena::{NodeArena, NodeId, Unlinked};
use crate::domain::balance;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::snapshot::Snapshot;
use crate::domain::traversal::{
    self, InorderIter, LevelOrderIter, Order, PostorderIter, PreorderIter, Traverse,
};

/// Ordered collection backed by an unbalanced binary search tree.
///
/// Equal values are stored once; adding a value that is already present is a
/// no-op. Positional access (`get`, `index_of`, `remove_at`, ...) addresses
/// the preorder sequence, which is recomputed on every call.
#[derive(Debug)]
pub struct SearchTree<T> {
    nodes: NodeArena<T>,
    root: Option<NodeId>,
    count: usize,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn root(&self) -> Option<&T> {
        self.root.map(|id| &self.nodes.node(id).value)
    }

    /// Arena and root handle, for code that walks the node structure itself.
    pub fn nodes(&self) -> (&NodeArena<T>, Option<NodeId>) {
        (&self.nodes, self.root)
    }

    pub fn lowest(&self) -> Option<&T> {
        self.root
            .map(|id| &self.nodes.node(self.nodes.minimum(id)).value)
    }

    pub fn highest(&self) -> Option<&T> {
        self.root
            .map(|id| &self.nodes.node(self.nodes.maximum(id)).value)
    }

    pub fn height(&self) -> usize {
        traversal::height(&self.nodes, self.root)
    }

    pub fn preorder(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(&self.nodes, self.root)
    }

    pub fn inorder(&self) -> InorderIter<'_, T> {
        InorderIter::new(&self.nodes, self.root)
    }

    pub fn postorder(&self) -> PostorderIter<'_, T> {
        PostorderIter::new(&self.nodes, self.root)
    }

    pub fn level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(&self.nodes, self.root)
    }

    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(&self.nodes, self.root, order)
    }

    /// Deletes the root until the tree is empty.
    #[instrument(level = "debug", skip(self), fields(count = self.count))]
    pub fn clear(&mut self) {
        while let Some(root) = self.root {
            if self.delete_node(root).is_none() {
                break;
            }
        }
        debug!("tree cleared");
    }

    fn delete_node(&mut self, id: NodeId) -> Option<T> {
        let (value, unlinked) = self.nodes.delete(id)?;
        self.settle(unlinked);
        Some(value)
    }

    /// Bookkeeping after exactly one node left the arena.
    fn settle(&mut self, unlinked: Unlinked) {
        if unlinked == Unlinked::Root {
            self.root = None;
        }
        self.count -= 1;
    }
}

impl<T: Clone> SearchTree<T> {
    /// The inorder sequence: ascending.
    pub fn sort(&self) -> Vec<T> {
        self.inorder().cloned().collect()
    }

    /// The preorder sequence; this is what positions index into.
    pub fn to_vec(&self) -> Vec<T> {
        self.preorder().cloned().collect()
    }

    /// Freezes the preorder sequence for sequential access.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }

    /// Value at preorder position `index`.
    pub fn get(&self, index: usize) -> TreeResult<T> {
        let items = self.to_vec();
        let available = items.len();
        items.into_iter().nth(index).ok_or(TreeError::OutOfRange {
            requested: index,
            available,
        })
    }

    /// Writes the preorder sequence into `dest` starting at `offset`, at most
    /// `limit` elements when given.
    pub fn copy_to(&self, dest: &mut [T], offset: usize, limit: Option<usize>) -> TreeResult<()> {
        let wanted = limit.map_or(self.count, |limit| limit.min(self.count));
        let end = offset
            .checked_add(wanted)
            .filter(|&end| end <= dest.len())
            .ok_or(TreeError::OutOfRange {
                requested: offset.saturating_add(wanted),
                available: dest.len(),
            })?;
        for (slot, value) in dest[offset..end].iter_mut().zip(self.preorder()) {
            *slot = value.clone();
        }
        Ok(())
    }
}

impl<T: Ord + Clone + fmt::Debug> SearchTree<T> {
    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns whether a node was created; `len` only grows when it was.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, value: T) -> bool {
        let inserted = match self.root {
            None => {
                self.root = Some(self.nodes.insert_root(value));
                true
            }
            Some(root) => self.nodes.insert_from(root, value).is_some(),
        };
        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Adds every value in argument order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Inserts `value` with the descent starting at the node that currently
    /// holds preorder position `index` instead of the root.
    ///
    /// The anchor's subtree bounds are not checked: a value outside them is
    /// placed below the anchor anyway and breaks the ordering of the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_at(&mut self, index: usize, value: T) -> TreeResult<bool> {
        let anchor_value = self.get(index)?;
        let anchor = self.find_node(&anchor_value)?;
        let inserted = self.nodes.insert_from(anchor, value).is_some();
        if inserted {
            self.count += 1;
        }
        Ok(inserted)
    }

    /// Removes `value`; `false` (and no change) when it is absent.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        match self.nodes.remove_value(root, value) {
            Some((_, unlinked)) => {
                self.settle(unlinked);
                true
            }
            None => {
                debug!("nothing to remove");
                false
            }
        }
    }

    /// Removes the value at preorder position `index` and returns it.
    ///
    /// A value placed out of order by [`insert_at`](Self::insert_at) cannot be
    /// reached from the root; it stays in place and `NotFound` is returned.
    pub fn remove_at(&mut self, index: usize) -> TreeResult<T> {
        let value = self.get(index)?;
        if !self.remove(&value) {
            return Err(TreeError::NotFound(format!("{:?}", value)));
        }
        Ok(value)
    }

    /// Replaces the value at preorder position `index` with `value`.
    ///
    /// The new value is placed by ordinary insertion, so it generally ends up
    /// at a different position. Nothing is added when the removal fails.
    pub fn set(&mut self, index: usize, value: T) -> TreeResult<()> {
        self.remove_at(index)?;
        self.add(value);
        Ok(())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root
            .is_some_and(|root| self.nodes.contains(root, value))
    }

    /// Direct lookup that must succeed.
    pub fn find(&self, value: &T) -> TreeResult<&T> {
        let id = self.find_node(value)?;
        Ok(&self.nodes.node(id).value)
    }

    fn find_node(&self, value: &T) -> TreeResult<NodeId> {
        let root = self
            .root
            .ok_or_else(|| TreeError::NotFound(format!("{:?}", value)))?;
        self.nodes.find(root, value)
    }

    /// Preorder position of `value`, scanning positions `0..len`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.preorder().position(|v| v == value)
    }

    /// Whether every node sits between the bounds its ancestors impose.
    pub fn is_ordered(&self) -> bool {
        self.root.map_or(true, |root| self.nodes.is_ordered(root))
    }

    /// Rebuilds the tree with minimal height from its sorted contents.
    #[instrument(level = "debug", skip(self), fields(count = self.count))]
    pub fn balance(&mut self) {
        let sorted = self.sort();
        let replay = balance::replay(sorted);
        self.clear();
        for value in replay {
            self.add(value);
        }
        debug!(height = self.height(), "tree balanced");
    }
}

impl<T: Ord + Clone + fmt::Debug> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        tree.add_all(iter);
        tree
    }
}

impl<T: Ord + Clone + fmt::Debug> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: Clone> IntoIterator for &'a SearchTree<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchTree<i32> {
        [40, 11, 62, 43, 34, 16, 10, 63].into_iter().collect()
    }

    #[test]
    fn add_counts_only_new_values() {
        let mut tree = sample();
        assert!(!tree.add(34));
        assert_eq!(tree.len(), 8);
        assert!(tree.add(3));
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn remove_of_root_only_tree_empties_it() {
        let mut tree = SearchTree::new();
        tree.add(1);
        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(!tree.remove(&1));
    }

    #[test]
    fn count_matches_arena() {
        let mut tree = sample();
        tree.remove(&40);
        tree.remove(&99);
        tree.add(40);
        let (nodes, _) = tree.nodes();
        assert_eq!(nodes.len(), tree.len());
        assert_eq!(tree.inorder().count(), tree.len());
    }

    #[test]
    fn empty_tree_accessors() {
        let tree: SearchTree<i32> = SearchTree::new();
        assert_eq!(tree.lowest(), None);
        assert_eq!(tree.highest(), None);
        assert_eq!(tree.height(), 0);
        assert!(!tree.contains(&1));
        assert!(tree.find(&1).is_err());
        assert!(tree.sort().is_empty());
        assert!(tree.is_ordered());
    }
}
