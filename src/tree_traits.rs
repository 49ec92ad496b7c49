/*
Box-drawing view of a tree via termtree.

Vacant slots of fixed-arity nodes are skipped; only occupied children appear.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::GenericTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for GenericTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // Post-order leaves each node's finished children on top of `built`
        let mut built: Vec<Tree<String>> = Vec::new();
        for (_, node) in self.iter_postorder() {
            let leaves = built.split_off(built.len().saturating_sub(node.child_count()));
            built.push(Tree::new(node.data().to_string()).with_leaves(leaves));
        }
        built
            .pop()
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}
