use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{
    check_limits, check_mask, check_neighbor, check_source, is_passable,
};
use crate::graph::types::{Mask, NodeId, ReachResult, SearchOptions, TraversalStats};
use crate::graph::Graph;

/// Flood fill from `source` into the caller's `visited` set
///
/// `visited` must be empty on entry and is left untouched on failure. When a
/// mask is given, blocked neighbors are never entered; the source itself is
/// not checked against the mask.
#[tracing::instrument(skip(graph, mask, opts, visited), fields(source = source, masked = mask.is_some()))]
pub fn reach_into(
    graph: &dyn Graph,
    source: NodeId,
    mask: Option<&Mask>,
    opts: &SearchOptions,
    visited: &mut BTreeSet<NodeId>,
) -> Result<TraversalStats> {
    if !visited.is_empty() {
        return Err(GraphError::EmptyOutputViolation {
            context: "visited set".to_string(),
        });
    }
    check_source(graph, source)?;
    check_mask(graph, mask)?;

    let node_count = graph.node_count();
    let mut stats = TraversalStats::default();
    let mut seen = BTreeSet::new();
    let mut active = vec![source];
    seen.insert(source);

    while let Some(node) = active.pop() {
        check_limits(&stats, opts)?;
        stats.record_expansion();

        for nbr in graph.neighbors(node) {
            check_neighbor(node_count, nbr)?;
            if !is_passable(mask, nbr) {
                continue;
            }
            if seen.insert(nbr) {
                active.push(nbr);
            }
        }
    }

    tracing::debug!(
        visited = seen.len(),
        expanded = stats.expanded,
        "flood_fill_complete"
    );

    *visited = seen;
    Ok(stats)
}

/// Reachability closure of `source` with an optional mask
pub fn reach(
    graph: &dyn Graph,
    source: NodeId,
    mask: Option<&Mask>,
    opts: &SearchOptions,
) -> Result<ReachResult> {
    let mut visited = BTreeSet::new();
    let stats = reach_into(graph, source, mask, opts, &mut visited)?;
    Ok(ReachResult {
        source,
        visited,
        stats,
    })
}

/// Every node reachable from `source`
pub fn flood_fill(graph: &dyn Graph, source: NodeId) -> Result<ReachResult> {
    reach(graph, source, None, &SearchOptions::default())
}

/// Every node reachable from `source` without entering a masked node
///
/// Typically run on a dual view (faces or cells) with the mask marking
/// barrier elements.
pub fn flood_fill_masked(graph: &dyn Graph, source: NodeId, mask: &Mask) -> Result<ReachResult> {
    reach(graph, source, Some(mask), &SearchOptions::default())
}

#[cfg(test)]
mod tests;
