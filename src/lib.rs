//! Generic N-ary tree with fixed or unbounded arity.
//!
//! Nodes live in an arena owned by [`GenericTree`] and are addressed through
//! [`NodeId`] handles. Children are kept either as a dense list or as a fixed
//! array of slots that may be vacant.
//!
//! ```
//! use gentree::{Arity, GenericTree};
//!
//! let mut tree = GenericTree::with_root(Arity::Unbounded, 1);
//! let root = tree.root().unwrap();
//! tree.insert_child(root, 3, true).unwrap();
//! tree.insert_child(root, 2, true).unwrap();
//!
//! assert!(tree.search(&3).is_some());
//! assert_eq!(tree.to_string(), "1\n   2\n   3\n");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    Arity, GenericTree, NodeId, PrintOptions, TreeError, TreeNode, TreeResult,
};
