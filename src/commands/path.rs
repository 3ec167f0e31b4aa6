//! `graphwalk path` command - shortest path to the nearest destination
//!
//! Paths print destination first, matching the order the search
//! reconstructs them in. `--forward` (or `output.forward` in the config)
//! prints them from the source instead.

use std::collections::BTreeSet;

use crate::cli::PathArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::reach::join_ids;
use crate::output_by_format;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{find_path, NodeId, Target};
use graphwalk_core::log_traversal_stats;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let loaded = ctx.load_graph(&args.graph)?;
    let graph = &loaded.graph;
    let mask = ctx.mask(graph, args.mask.as_deref())?;
    let opts = ctx.search_options(args.max_expansions);

    let dests: BTreeSet<NodeId> = args.dests.iter().copied().collect();
    let target = match args.dests.as_slice() {
        [single] => Target::Node(*single),
        _ => Target::AnyOf(&dests),
    };

    let result = find_path(graph, args.source, target, mask.as_ref(), &opts)?;
    log_traversal_stats!(&result.stats, "path");

    let masked: Vec<NodeId> = mask.iter().flat_map(|m| m.blocked()).collect();
    let forward = args.forward || ctx.config.output.forward;
    let (nodes, order) = if forward {
        (result.source_to_destination(), "source_to_destination")
    } else {
        (result.nodes.clone(), "destination_to_source")
    };

    output_by_format!(ctx.format(),
        json => {
            let output = serde_json::json!({
                "source": result.source,
                "reached": result.reached,
                "hops": result.hops(),
                "order": order,
                "destinations": target.nodes(),
                "masked": masked,
                "nodes": nodes,
                "stats": result.stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "path from {} to {} ({} hops)",
                    result.source,
                    result.reached,
                    result.hops()
                );
            }
            println!("{}", join_ids(&nodes));
        },
        records => {
            println!(
                "H graphwalk=1 records=1 mode=path source={} reached={} hops={} order={}",
                result.source,
                result.reached,
                result.hops(),
                order
            );
            for node in &nodes {
                println!("N {}", node);
            }
        }
    );

    Ok(())
}
