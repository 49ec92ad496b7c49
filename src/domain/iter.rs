//! Stateless traversal: every iterator carries its own position.

use tracing::instrument;

use crate::domain::children::ChildIter;
use crate::domain::node::{NodeId, TreeNode};
use crate::domain::tree::GenericTree;

/// Occupied children of one node, in index order.
pub struct ChildNodes<'a, T> {
    tree: &'a GenericTree<T>,
    inner: Option<ChildIter<'a>>,
}

impl<'a, T> ChildNodes<'a, T> {
    pub(crate) fn new(tree: &'a GenericTree<T>, id: NodeId) -> Self {
        Self {
            tree,
            inner: tree.node(id).map(TreeNode::children),
        }
    }
}

impl<'a, T> Iterator for ChildNodes<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        inner
            .by_ref()
            .find_map(|(_, id)| self.tree.node(id).map(|node| (id, node)))
    }
}

pub struct TreeIterator<'a, T> {
    tree: &'a GenericTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> TreeIterator<'a, T> {
    pub(crate) fn new(tree: &'a GenericTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                // Push children in reverse order for left-to-right traversal
                let children: Vec<NodeId> = node.children().map(|(_, id)| id).collect();
                self.stack.extend(children.into_iter().rev());
                return Some((current, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    tree: &'a GenericTree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    pub(crate) fn new(tree: &'a GenericTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                if visited {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                let children: Vec<NodeId> = node.children().map(|(_, id)| id).collect();
                self.stack
                    .extend(children.into_iter().rev().map(|id| (id, false)));
            }
        }
        None
    }
}
