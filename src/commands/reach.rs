//! `graphwalk reach` command - flood fill from a source node

use crate::cli::ReachArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{reach, Graph};
use graphwalk_core::log_traversal_stats;

/// Execute the reach command
pub fn execute(ctx: &CommandContext, args: &ReachArgs) -> Result<()> {
    let loaded = ctx.load_graph(&args.graph)?;
    let graph = &loaded.graph;
    let mask = ctx.mask(graph, args.mask.as_deref())?;
    let opts = ctx.search_options(args.max_expansions);

    let result = reach(graph, args.source, mask.as_ref(), &opts)?;
    log_traversal_stats!(&result.stats, "reach");

    let visited: Vec<_> = result.visited.iter().copied().collect();
    let masked: Vec<_> = mask.iter().flat_map(|m| m.blocked()).collect();

    output_by_format!(ctx.format(),
        json => {
            let output = serde_json::json!({
                "source": result.source,
                "view": args.graph.view,
                "count": visited.len(),
                "node_count": graph.node_count(),
                "masked": masked,
                "visited": visited,
                "stats": result.stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "{} of {} nodes reachable from {}",
                    visited.len(),
                    graph.node_count(),
                    result.source
                );
            }
            println!("{}", join_ids(&visited));
        },
        records => {
            println!(
                "H graphwalk=1 records=1 mode=reach source={} view={} count={} node_count={}",
                result.source,
                args.graph.view,
                visited.len(),
                graph.node_count()
            );
            for node in &visited {
                println!("N {}", node);
            }
        }
    );

    Ok(())
}

pub(crate) fn join_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
