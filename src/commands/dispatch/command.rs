//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{AdjacencyList, Graph, GraphDocument, Mask, NodeId, SearchOptions};
use graphwalk_core::trace_time;

use super::macros::trace_command;

/// A graph document together with the adjacency built for one view
pub struct LoadedGraph {
    pub document: GraphDocument,
    pub graph: AdjacencyList,
}

/// `--format`, else the configured format, else human
pub fn effective_format(cli: &Cli, config: &GraphwalkConfig) -> OutputFormat {
    cli.format.or(config.output.format).unwrap_or_default()
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphwalkConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GraphwalkConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn format(&self) -> OutputFormat {
        effective_format(self.cli, &self.config)
    }

    pub fn search_options(&self, max_expansions: Option<usize>) -> SearchOptions {
        self.config.search_options(max_expansions)
    }

    pub fn load_graph(&self, args: &GraphArgs) -> Result<LoadedGraph> {
        let load_start = Instant::now();
        let document = GraphDocument::load(&args.file)?;
        let graph = document.build(args.view)?;
        trace_time!(
            load_start,
            "load_graph",
            nodes = graph.node_count(),
            edge_bound = graph.edge_count_upper_bound()
        );
        trace_command!(self.cli, self.start, "load_graph");
        Ok(LoadedGraph { document, graph })
    }

    /// Mask sized to `graph` blocking `ids`, or none when no ids were given
    pub fn mask(&self, graph: &dyn Graph, ids: Option<&[NodeId]>) -> Result<Option<Mask>> {
        ids.map(|ids| Mask::from_blocked(graph.node_count(), ids.iter().copied()))
            .transpose()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Reachability and shortest paths over graphs and meshes.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
