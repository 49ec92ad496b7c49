//! Arena-backed generic N-ary tree.

use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::arity::Arity;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::iter::{ChildNodes, PostOrderIterator, TreeIterator};
use crate::domain::node::{NodeId, TreeNode};

/// Generic tree whose arity policy applies to every node it creates.
///
/// Nodes are stored in a generational arena owned by the tree; callers hold
/// [`NodeId`] handles. A node exclusively owns its subtree: removing it
/// removes every descendant.
#[derive(Debug)]
pub struct GenericTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Option<NodeId>,
    arity: Arity,
}

impl<T> Default for GenericTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenericTree<T> {
    /// Empty tree with unbounded arity.
    pub fn new() -> Self {
        Self::with_arity(Arity::Unbounded)
    }

    pub fn with_arity(arity: Arity) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            arity,
        }
    }

    /// Empty tree; `capacity < 1` means unbounded.
    pub fn with_capacity(capacity: i64) -> Self {
        Self::with_arity(Arity::from_capacity(capacity))
    }

    pub fn with_root(arity: Arity, value: T) -> Self {
        let mut tree = Self::with_arity(arity);
        let idx = tree.arena.insert(TreeNode::new(value, None, arity));
        tree.root = Some(NodeId::from(idx));
        tree
    }

    /// Creates the root of an empty tree.
    pub fn set_root(&mut self, value: T) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootAlreadySet);
        }
        let id = NodeId::from(self.arena.insert(TreeNode::new(value, None, self.arity)));
        self.root = Some(id);
        Ok(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.index())
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(id.index())
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.data)
    }

    /// Mutable payload access. Changing a value used for ordering does not
    /// re-sort its siblings.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|n| &mut n.data)
    }

    /// Replaces the payload, returning the previous one.
    pub fn set_data(&mut self, id: NodeId, value: T) -> TreeResult<T> {
        let node = self.node_mut(id).ok_or(TreeError::NodeNotFound(id))?;
        Ok(std::mem::replace(&mut node.data, value))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).and_then(|n| n.child_at(index))
    }

    pub fn child_count(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(TreeNode::child_count)
    }

    /// `None` for a stale handle.
    pub fn is_leaf(&self, id: NodeId) -> Option<bool> {
        self.node(id).map(TreeNode::is_leaf)
    }

    /// True when `id` is the last occupied child of its parent.
    ///
    /// The root counts as its own last child.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        match self.parent(id) {
            None => self.root == Some(id),
            Some(parent) => self
                .node(parent)
                .and_then(|p| p.children.last_index().and_then(|i| p.child_at(i)))
                == Some(id),
        }
    }

    /// Occupied children of `id` in index order.
    pub fn children(&self, id: NodeId) -> ChildNodes<'_, T> {
        ChildNodes::new(self, id)
    }

    /// Appends or sort-inserts a new child below `parent`.
    ///
    /// Only valid for unbounded trees. With `keep_sorted` the value goes before
    /// the first child that compares strictly greater, so equal values keep
    /// insertion order. Mixing sorted and unsorted inserts on the same parent
    /// leaves the order unspecified.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_child(&mut self, parent: NodeId, value: T, keep_sorted: bool) -> TreeResult<NodeId>
    where
        T: Ord,
    {
        if let Some(capacity) = self.arity.capacity() {
            debug!("insert_child rejected on fixed arity {}", capacity);
            return Err(TreeError::ArityMismatch { capacity });
        }
        let node = self.node(parent).ok_or(TreeError::NodeNotFound(parent))?;
        let index = if keep_sorted {
            node.children()
                .find(|&(_, child)| self.get(child).is_some_and(|c| *c > value))
                .map_or(node.child_count(), |(i, _)| i)
        } else {
            node.child_count()
        };
        self.attach(parent, value, index)
    }

    /// Inserts a new child at an exact position below `parent`.
    ///
    /// Unbounded trees accept `index <= child_count`; fixed trees accept a
    /// vacant slot below the capacity.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_child_at(&mut self, parent: NodeId, value: T, index: usize) -> TreeResult<NodeId> {
        let node = self.node(parent).ok_or(TreeError::NodeNotFound(parent))?;
        let bound = node.children.insert_bound();
        if index >= bound {
            debug!("insert_child_at rejected: index {} bound {}", index, bound);
            return Err(TreeError::IndexOutOfBounds { index, bound });
        }
        self.attach(parent, value, index)
    }

    /// Builds the child already knowing its parent, then links it in.
    fn attach(&mut self, parent: NodeId, value: T, index: usize) -> TreeResult<NodeId> {
        let child = NodeId::from(
            self.arena
                .insert(TreeNode::new(value, Some(parent), self.arity)),
        );
        let linked = self
            .node_mut(parent)
            .ok_or(TreeError::NodeNotFound(parent))
            .and_then(|p| p.insert_child_at(child, index));
        if let Err(e) = linked {
            debug!("attach failed: {}", e);
            self.arena.remove(child.index());
            return Err(e);
        }
        Ok(child)
    }

    /// Removes the child at `index` together with its whole subtree.
    ///
    /// Returns the removed child's value; an invalid index or vacant slot is a
    /// silent no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Option<T> {
        let child = self.node_mut(parent)?.remove_child_at(index)?;
        let mut stack: Vec<NodeId> = self.node(child)?.children().map(|(_, id)| id).collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.remove(id.index()) {
                stack.extend(node.children.iter().map(|(_, c)| c));
            }
        }
        let removed = self.arena.remove(child.index()).map(|n| n.data);
        debug!("removed subtree at index {}, {} nodes left", index, self.len());
        removed
    }

    /// Pre-order depth-first search from the root; first match in child order wins.
    #[instrument(level = "trace", skip_all)]
    pub fn search(&self, target: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        self.search_from(self.root?, target)
    }

    /// Pre-order depth-first search restricted to the subtree at `from`.
    pub fn search_from(&self, from: NodeId, target: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.data == *target {
                return Some(id);
            }
            // Reverse push keeps the leftmost child on top
            let children: Vec<NodeId> = node.children().map(|(_, child)| child).collect();
            stack.extend(children.into_iter().rev());
        }
        None
    }

    /// Pre-order iterator over `(id, node)`.
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// Number of levels; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        let mut max_level = 0;
        while let Some((id, level)) = stack.pop() {
            if let Some(node) = self.node(id) {
                max_level = max_level.max(level);
                stack.extend(node.children().map(|(_, child)| (child, level + 1)));
            }
        }
        max_level
    }

    /// Leaf handles in pre-order.
    pub fn leaf_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
            .collect()
    }
}
