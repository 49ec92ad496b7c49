//! Domain layer: the tree data structure
//!
//! This layer is independent of external concerns (no config loading, no CLI).

pub mod arity;
pub mod children;
pub mod error;
pub mod iter;
pub mod node;
pub mod render;
pub mod tree;

pub use arity::Arity;
pub use children::Children;
pub use error::{TreeError, TreeResult};
pub use iter::{ChildNodes, PostOrderIterator, TreeIterator};
pub use node::{NodeId, TreeNode};
pub use render::{PrintOptions, MAX_INDENT_WIDTH};
pub use tree::GenericTree;
