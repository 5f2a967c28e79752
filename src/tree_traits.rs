use std::collections::HashMap;
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeArena, NodeId, SearchTree};

/// Placeholder drawn for the missing side of a node with a single child.
pub const VACANT: &str = "·";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for SearchTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let (nodes, root) = self.nodes();
        match root {
            Some(root_idx) => build_tree(nodes, root_idx),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

/// Builds the drawing children first with an explicit stack, so skewed
/// trees do not exhaust the call stack.
fn build_tree<T: Display>(nodes: &NodeArena<T>, root: NodeId) -> Tree<String> {
    let mut built: HashMap<NodeId, Tree<String>> = HashMap::new();
    let mut stack = vec![(root, false)];
    while let Some((id, visited)) = stack.pop() {
        let Some(node) = nodes.get(id) else {
            continue;
        };
        if !visited {
            stack.push((id, true));
            stack.extend(node.right.map(|right| (right, false)));
            stack.extend(node.left.map(|left| (left, false)));
            continue;
        }
        let left = node.left.and_then(|left| built.remove(&left));
        let right = node.right.and_then(|right| built.remove(&right));
        let tree = Tree::new(node.value.to_string());
        // keep left and right apart when only one side is present
        let tree = match (left, right) {
            (Some(left), Some(right)) => tree.with_leaves([left, right]),
            (Some(left), None) => tree.with_leaves([left, Tree::new(VACANT.to_string())]),
            (None, Some(right)) => tree.with_leaves([Tree::new(VACANT.to_string()), right]),
            (None, None) => tree,
        };
        built.insert(id, tree);
    }
    built
        .remove(&root)
        .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_vacant_side_of_single_child() {
        let tree: SearchTree<i32> = [2, 1].into_iter().collect();
        let rendered = tree.to_tree_string().to_string();
        assert_eq!(rendered, "2\n├── 1\n└── ·\n");
    }

    #[test]
    fn renders_empty_tree() {
        let tree: SearchTree<i32> = SearchTree::new();
        assert_eq!(tree.to_tree_string().to_string(), "Empty tree\n");
    }

    #[test]
    fn renders_skewed_tree_without_recursion() {
        let tree: SearchTree<i32> = (0..2_000).collect();
        let rendered = tree.to_tree_string().to_string();
        // every node but the last draws a vacant left side
        assert_eq!(rendered.lines().count(), 2_000 + 1_999);
        assert_eq!(rendered.lines().next(), Some("0"));
    }
}
