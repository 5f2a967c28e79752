use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{TreeError, TreeResult};

/// Handle of a node inside a [`NodeArena`].
pub type NodeId = Index;

/// Tree node in the arena-based search tree.
#[derive(Debug)]
pub struct Node<T> {
    /// Key held by this node
    pub value: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<NodeId>,
    /// Subtree holding smaller keys
    pub left: Option<NodeId>,
    /// Subtree holding greater keys
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// A node without parent. Only the tree's root reference points at one.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.is_leaf()
    }

    pub fn has_single_child(&self) -> bool {
        self.left.is_some() ^ self.right.is_some()
    }
}

/// What a delete did to the structure above the removed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlinked {
    /// A child slot of the parent was cleared.
    Child,
    /// The removed node had no parent: the subtree it rooted is now empty.
    Root,
}

/// Arena storage for search tree nodes.
///
/// Nodes reference each other by [`NodeId`]; ownership means "reachable from
/// the root index". The arena does not know which node is the root, delete
/// reports [`Unlinked::Root`] and the caller clears its root reference.
///
/// Ids handed out by the arena stay valid until the node is deleted; indexing
/// with a removed id is a bug in the caller.
#[derive(Debug)]
pub struct NodeArena<T> {
    arena: Arena<Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.arena[id]
    }

    /// Allocates a parentless node.
    pub fn insert_root(&mut self, value: T) -> NodeId {
        self.arena.insert(Node::new(value, None))
    }

    /// Follows `left` until there is none.
    pub fn minimum(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        current
    }

    /// Follows `right` until there is none.
    pub fn maximum(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        current
    }

    /// Removes the node `id` holds from the structure.
    ///
    /// A leaf is detached from its parent. An internal node takes over the
    /// value of its in-order predecessor (or successor when there is no left
    /// subtree) and the donor is deleted in its place. The donor is always
    /// closer to being a leaf, so the loop terminates with exactly one node
    /// removed from the arena.
    pub fn delete(&mut self, id: NodeId) -> Option<(T, Unlinked)> {
        let mut target = id;
        loop {
            let node = self.node(target);
            let donor = match (node.left, node.right) {
                (Some(left), _) => self.maximum(left),
                (None, Some(right)) => self.minimum(right),
                (None, None) => return self.detach_leaf(target),
            };
            // The removed value travels down to the donor, which is removed next.
            if let (Some(keep), Some(give)) = self.arena.get2_mut(target, donor) {
                std::mem::swap(&mut keep.value, &mut give.value);
            }
            target = donor;
        }
    }

    fn detach_leaf(&mut self, id: NodeId) -> Option<(T, Unlinked)> {
        let node = self.arena.remove(id)?;
        let unlinked = match node.parent {
            Some(parent) => {
                if let Some(parent) = self.arena.get_mut(parent) {
                    if parent.left == Some(id) {
                        parent.left = None;
                    }
                    if parent.right == Some(id) {
                        parent.right = None;
                    }
                }
                Unlinked::Child
            }
            None => Unlinked::Root,
        };
        Some((node.value, unlinked))
    }
}

impl<T: Ord + fmt::Debug> NodeArena<T> {
    /// Descends from `from` and hangs `value` into the first vacant child slot
    /// on its path.
    ///
    /// Returns the new node, or `None` when an equal value was met (the
    /// duplicate is dropped).
    pub fn insert_from(&mut self, from: NodeId, value: T) -> Option<NodeId> {
        let mut current = from;
        loop {
            let node = self.node(current);
            let slot = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return None,
            };
            match slot {
                Some(child) => current = child,
                None => {
                    let goes_left = value < node.value;
                    let child = self.arena.insert(Node::new(value, Some(current)));
                    let parent = &mut self.arena[current];
                    if goes_left {
                        parent.left = Some(child);
                    } else {
                        parent.right = Some(child);
                    }
                    return Some(child);
                }
            }
        }
    }

    fn locate(&self, from: NodeId, value: &T) -> Option<NodeId> {
        let mut current = from;
        loop {
            let node = self.node(current);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left?,
                Ordering::Greater => node.right?,
                Ordering::Equal => return Some(current),
            };
        }
    }

    /// Exact-match lookup below `from`.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, from: NodeId, value: &T) -> TreeResult<NodeId> {
        self.locate(from, value)
            .ok_or_else(|| TreeError::NotFound(format!("{:?}", value)))
    }

    /// Same descent as [`find`](Self::find), absence is `false`.
    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, from: NodeId, value: &T) -> bool {
        self.locate(from, value).is_some()
    }

    /// Deletes the node holding `value` below `from`, if any.
    pub fn remove_value(&mut self, from: NodeId, value: &T) -> Option<(T, Unlinked)> {
        let id = self.locate(from, value)?;
        self.delete(id)
    }

    /// Checks the ordering invariant below `from` with a range-bound scan.
    pub fn is_ordered(&self, from: NodeId) -> bool {
        let mut stack: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(from, None, None)];
        while let Some((id, low, high)) = stack.pop() {
            let node = self.node(id);
            let below = low.is_some_and(|low| node.value <= *low);
            let above = high.is_some_and(|high| node.value >= *high);
            if below || above {
                return false;
            }
            if let Some(left) = node.left {
                if self.node(left).parent != Some(id) {
                    return false;
                }
                stack.push((left, low, Some(&node.value)));
            }
            if let Some(right) = node.right {
                if self.node(right).parent != Some(id) {
                    return false;
                }
                stack.push((right, Some(&node.value), high));
            }
        }
        true
    }
}
