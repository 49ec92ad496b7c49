use std::fmt;

use generational_arena::Index;

use crate::domain::arity::Arity;
use crate::domain::children::{ChildIter, Children};
use crate::domain::error::TreeResult;

/// Handle of a node inside its tree's arena.
///
/// A handle outlives the node it names: once the node is removed the handle
/// resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl NodeId {
    pub(crate) fn index(self) -> Index {
        self.0
    }
}

impl From<Index> for NodeId {
    fn from(index: Index) -> Self {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}v{}", slot, generation)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload
    pub(crate) data: T,
    /// Parent handle, None for the root
    pub(crate) parent: Option<NodeId>,
    /// Owned children
    pub(crate) children: Children,
}

impl<T> TreeNode<T> {
    /// Only the tree creates nodes, so arity always comes from the tree policy.
    pub(crate) fn new(data: T, parent: Option<NodeId>, arity: Arity) -> Self {
        Self {
            data,
            parent,
            children: Children::for_arity(arity),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child_count(&self) -> usize {
        self.children.count()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child at `index`, respecting the node's storage bound; never mutates.
    pub fn child_at(&self, index: usize) -> Option<NodeId> {
        self.children.get_at(index)
    }

    /// Occupied children in index order, with their index.
    pub fn children(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.children.iter().next().map(|(_, id)| id)
    }

    /// Child following the one at `index`, skipping vacant slots.
    pub fn next_child_after(&self, index: usize) -> Option<(usize, NodeId)> {
        self.children.iter().find(|&(i, _)| i > index)
    }

    pub(crate) fn insert_child_at(&mut self, child: NodeId, index: usize) -> TreeResult<()> {
        self.children.insert_at(index, child)
    }

    pub(crate) fn remove_child_at(&mut self, index: usize) -> Option<NodeId> {
        self.children.remove_at(index)
    }
}
