//! Structural errors of tree mutations (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// A rejected mutation. The tree is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("operation requires unbounded arity, tree has fixed capacity {capacity}; use an indexed insert")]
    ArityMismatch { capacity: usize },

    #[error("index {index} out of bounds (must be below {bound})")]
    IndexOutOfBounds { index: usize, bound: usize },

    #[error("slot {0} is already occupied")]
    SlotOccupied(usize),

    #[error("tree already has a root")]
    RootAlreadySet,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
