use clap::Args;
use std::path::PathBuf;

use crate::cli::parse::{parse_node_list, parse_view};
use graphwalk_core::graph::{NodeId, View};

/// Arguments shared by every command that loads a graph
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// Adjacency to use: primal (nodes, vertices) or dual (faces, cells)
    #[arg(long, default_value = "primal", value_parser = parse_view)]
    pub view: View,
}

#[derive(Args, Debug, Clone)]
pub struct ReachArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source node
    pub source: NodeId,

    /// Nodes the traversal may not enter (comma-separated)
    #[arg(long, value_parser = parse_node_list)]
    pub mask: Option<::std::vec::Vec<NodeId>>,

    /// Stop after this many node expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source node
    pub source: NodeId,

    /// Destination nodes; the nearest one is reached
    #[arg(required = true, num_args = 1..)]
    pub dests: Vec<NodeId>,

    /// Nodes the path may not pass through (comma-separated)
    #[arg(long, value_parser = parse_node_list)]
    pub mask: Option<::std::vec::Vec<NodeId>>,

    /// Stop after this many node expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the path from source to destination
    #[arg(long)]
    pub forward: bool,
}
