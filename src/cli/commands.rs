//! Command dispatch: builds trees from arguments and prints them

use std::io;
use std::str::FromStr;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Arity, GenericTree, NodeId, TreeResult};
use crate::tree_traits::TreeNodeConvert;

/// One `PARENT:CHILD[@INDEX]` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub parent: i64,
    pub child: i64,
    pub index: Option<usize>,
}

impl FromStr for Edge {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidArgs(format!("expected PARENT:CHILD[@INDEX], got '{}'", s));
        let (parent, rest) = s.split_once(':').ok_or_else(invalid)?;
        let (child, index) = match rest.split_once('@') {
            Some((child, index)) => (child, Some(index.trim().parse().map_err(|_| invalid())?)),
            None => (rest, None),
        };
        Ok(Edge {
            parent: parent.trim().parse().map_err(|_| invalid())?,
            child: child.trim().parse().map_err(|_| invalid())?,
            index,
        })
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        Some(Commands::Demo) => _demo(&settings),
        Some(Commands::Build {
            root,
            edges,
            arity,
            unsorted,
            find,
            fancy,
        }) => {
            let edges = edges
                .iter()
                .map(|e| e.parse())
                .collect::<CliResult<Vec<Edge>>>()?;
            let keep_sorted = settings.keep_sorted && !*unsorted;
            let tree = build_tree(*root, &edges, Arity::from_capacity(*arity), keep_sorted)?;
            _report(&tree, find, *fancy, &settings)
        }
        Some(Commands::Config) => {
            output::header("# effective settings");
            output::info(&settings.to_toml()?);
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Reference tree: root 1 with sorted children 2,3,5,6,7,8 and 4 below 3.
pub fn demo_tree() -> TreeResult<GenericTree<i64>> {
    let mut tree = GenericTree::with_root(Arity::Unbounded, 1);
    let Some(root) = tree.root() else {
        return Ok(tree);
    };
    for value in [2, 3, 5, 6] {
        tree.insert_child(root, value, true)?;
    }
    if let Some(three) = tree.child_at(root, 1) {
        tree.insert_child(three, 4, true)?;
    }
    for value in [7, 8] {
        tree.insert_child(root, value, true)?;
    }
    Ok(tree)
}

/// Builds an integer tree; each edge's parent is resolved by pre-order search.
#[instrument(level = "debug")]
pub fn build_tree(
    root: i64,
    edges: &[Edge],
    arity: Arity,
    keep_sorted: bool,
) -> CliResult<GenericTree<i64>> {
    let mut tree = GenericTree::with_root(arity, root);
    for edge in edges {
        let parent = tree
            .search(&edge.parent)
            .ok_or_else(|| CliError::InvalidArgs(format!("parent {} not in tree", edge.parent)))?;
        let index = match (edge.index, arity) {
            (Some(index), _) => Some(index),
            (None, Arity::Fixed(_)) => Some(first_vacant_slot(&tree, parent).ok_or_else(|| {
                CliError::InvalidArgs(format!("node {} has no vacant slot", edge.parent))
            })?),
            (None, Arity::Unbounded) => None,
        };
        debug!("edge {:?} -> slot {:?}", edge, index);
        match index {
            Some(index) => tree.insert_child_at(parent, edge.child, index)?,
            None => tree.insert_child(parent, edge.child, keep_sorted)?,
        };
    }
    Ok(tree)
}

fn first_vacant_slot<T>(tree: &GenericTree<T>, id: NodeId) -> Option<usize> {
    let capacity = tree.arity().capacity()?;
    (0..capacity).find(|&i| tree.child_at(id, i).is_none())
}

#[instrument(skip(settings))]
fn _demo(settings: &Settings) -> CliResult<()> {
    let tree = demo_tree()?;
    _report(&tree, &[4], false, settings)
}

fn _report(
    tree: &GenericTree<i64>,
    find: &[i64],
    fancy: bool,
    settings: &Settings,
) -> CliResult<()> {
    for value in find {
        match tree.search(value) {
            Some(_) => output::found(&format!("{} was found!", value)),
            None => output::missing(&format!("{} was not found!", value)),
        }
    }
    if fancy {
        output::info(&tree.to_tree_string());
    } else {
        output::info(&tree.render(&settings.print));
    }
    Ok(())
}
