//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Build, search and print generic N-ary trees
#[derive(Parser, Debug)]
#[command(name = "gentree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the reference tree 1 -> {2,3,5,6,7,8}, 3 -> {4}, search 4 and print it
    Demo,

    /// Build an integer tree from PARENT:CHILD edges and print it
    Build {
        /// Root value
        #[arg(allow_hyphen_values = true)]
        root: i64,

        /// Edges as PARENT:CHILD, or PARENT:CHILD@INDEX for an indexed insert
        edges: Vec<String>,

        /// Fixed number of child slots per node; below 1 means unbounded
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        arity: i64,

        /// Append children instead of keeping them sorted
        #[arg(long)]
        unsorted: bool,

        /// Values to search for after building
        #[arg(short, long)]
        find: Vec<i64>,

        /// Box-drawing output instead of indented text
        #[arg(long)]
        fancy: bool,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
