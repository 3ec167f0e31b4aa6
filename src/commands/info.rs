//! `graphwalk info` command - summarize a graph document

use serde::Serialize;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, View};

#[derive(Debug, Serialize)]
struct InfoOutput<'a> {
    file: String,
    kind: &'a str,
    view: View,
    nodes: usize,
    edge_bound: usize,
    isolated: usize,
}

/// Execute the info command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let loaded = ctx.load_graph(args)?;
    let graph = &loaded.graph;

    let isolated = (0..graph.node_count())
        .filter(|&node| graph.neighbors(node).is_empty())
        .count();

    let output = InfoOutput {
        file: args.file.display().to_string(),
        kind: loaded.document.kind(),
        view: args.view,
        nodes: graph.node_count(),
        edge_bound: graph.edge_count_upper_bound(),
        isolated,
    };

    output_by_format!(ctx.format(),
        json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            println!("{} ({} document, {} view)", output.file, output.kind, output.view);
            println!("  nodes: {}", output.nodes);
            println!("  edge bound: {}", output.edge_bound);
            if output.isolated > 0 {
                println!("  isolated: {}", output.isolated);
            }
        },
        records => {
            println!(
                "H graphwalk=1 records=1 mode=info kind={} view={} nodes={} edge_bound={} isolated={}",
                output.kind, output.view, output.nodes, output.edge_bound, output.isolated
            );
        }
    );

    Ok(())
}
