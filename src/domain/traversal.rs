//! Lazy traversal orders over an arena tree.
//!
//! Every iterator starts a fresh walk from the node it was created with and
//! keeps its own stack (or queue), so walks are independent of each other and
//! their depth is not limited by the call stack.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::{NodeArena, NodeId};

/// Selects one of the four traversal orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Node, left subtree, right subtree
    #[default]
    Preorder,
    /// Left subtree, node, right subtree: ascending
    Inorder,
    /// Left subtree, right subtree, node
    Postorder,
    /// Breadth first, left before right
    Level,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Preorder => "preorder",
            Order::Inorder => "inorder",
            Order::Postorder => "postorder",
            Order::Level => "level",
        };
        write!(f, "{}", name)
    }
}

pub struct PreorderIter<'a, T> {
    nodes: &'a NodeArena<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreorderIter<'a, T> {
    #[instrument(level = "trace", skip(nodes))]
    pub(crate) fn new(nodes: &'a NodeArena<T>, start: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.nodes.node(id);
        // right goes first so that left is popped first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.value)
    }
}

pub struct InorderIter<'a, T> {
    nodes: &'a NodeArena<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> InorderIter<'a, T> {
    #[instrument(level = "trace", skip(nodes))]
    pub(crate) fn new(nodes: &'a NodeArena<T>, start: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            current: start,
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.nodes.node(id).left;
        }
        let id = self.stack.pop()?;
        let node = self.nodes.node(id);
        self.current = node.right;
        Some(&node.value)
    }
}

pub struct PostorderIter<'a, T> {
    nodes: &'a NodeArena<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostorderIter<'a, T> {
    #[instrument(level = "trace", skip(nodes))]
    pub(crate) fn new(nodes: &'a NodeArena<T>, start: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: start.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, visited)) = self.stack.pop() {
            let node = self.nodes.node(id);
            if visited {
                return Some(&node.value);
            }
            self.stack.push((id, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

pub struct LevelOrderIter<'a, T> {
    nodes: &'a NodeArena<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    #[instrument(level = "trace", skip(nodes))]
    pub(crate) fn new(nodes: &'a NodeArena<T>, start: Option<NodeId>) -> Self {
        Self {
            nodes,
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.nodes.node(id);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.value)
    }
}

/// Any of the four traversals, chosen at runtime by [`Order`].
pub enum Traverse<'a, T> {
    Preorder(PreorderIter<'a, T>),
    Inorder(InorderIter<'a, T>),
    Postorder(PostorderIter<'a, T>),
    Level(LevelOrderIter<'a, T>),
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(nodes: &'a NodeArena<T>, start: Option<NodeId>, order: Order) -> Self {
        match order {
            Order::Preorder => Traverse::Preorder(PreorderIter::new(nodes, start)),
            Order::Inorder => Traverse::Inorder(InorderIter::new(nodes, start)),
            Order::Postorder => Traverse::Postorder(PostorderIter::new(nodes, start)),
            Order::Level => Traverse::Level(LevelOrderIter::new(nodes, start)),
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traverse::Preorder(it) => it.next(),
            Traverse::Inorder(it) => it.next(),
            Traverse::Postorder(it) => it.next(),
            Traverse::Level(it) => it.next(),
        }
    }
}

/// Number of nodes on the longest path down from `start`.
pub(crate) fn height<T>(nodes: &NodeArena<T>, start: Option<NodeId>) -> usize {
    let mut max_depth = 0;
    let mut queue: VecDeque<(NodeId, usize)> = start.map(|id| (id, 1)).into_iter().collect();

    while let Some((id, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        let node = nodes.node(id);
        for child in [node.left, node.right].into_iter().flatten() {
            queue.push_back((child, depth + 1));
        }
    }

    max_depth
}
