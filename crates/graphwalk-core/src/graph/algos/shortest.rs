use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::algos::shared::{
    check_limits, check_mask, check_neighbor, check_source, check_target, is_passable,
};
use crate::graph::frontier::Frontier;
use crate::graph::types::{Mask, NodeId, PathResult, SearchOptions, Target, TraversalStats};
use crate::graph::Graph;

/// Per-call search state: distances, predecessors and the ordered frontier
struct SearchState {
    dist: Vec<usize>,
    prev: Vec<Option<NodeId>>,
    frontier: Frontier,
    unreached: usize,
    stats: TraversalStats,
}

impl SearchState {
    fn new(graph: &dyn Graph, source: NodeId) -> Self {
        let node_count = graph.node_count();
        // A shortest path never has more than node_count - 1 edges, so the
        // sentinel stays above every real distance even for a loose bound.
        let unreached = graph
            .edge_count_upper_bound()
            .max(node_count)
            .saturating_add(1);

        let mut dist = vec![unreached; node_count];
        dist[source] = 0;
        let mut frontier = Frontier::new();
        frontier.insert(0, source);

        Self {
            dist,
            prev: vec![None; node_count],
            frontier,
            unreached,
            stats: TraversalStats::default(),
        }
    }

    /// Offer `nbr` a path through `node` of length `candidate`
    fn relax(&mut self, node: NodeId, nbr: NodeId, candidate: usize) {
        let current = self.dist[nbr];
        if current <= candidate {
            return;
        }

        let replaced = current < self.unreached;
        if replaced {
            let removed = self.frontier.remove(current, nbr);
            debug_assert!(removed, "frontier entry missing for node {nbr}");
        }

        self.dist[nbr] = candidate;
        self.prev[nbr] = Some(node);
        self.frontier.insert(candidate, nbr);
        self.stats.record_relaxation(replaced);
    }
}

/// Unit-weight shortest path into the caller's `path`
///
/// `path` must be empty on entry. On success it holds the nodes from the
/// first destination popped back to the source. On failure it is left
/// empty. Returns the traversal stats.
pub fn find_path_into(
    graph: &dyn Graph,
    source: NodeId,
    target: Target<'_>,
    mask: Option<&Mask>,
    opts: &SearchOptions,
    path: &mut Vec<NodeId>,
) -> Result<TraversalStats> {
    if !path.is_empty() {
        return Err(GraphError::EmptyOutputViolation {
            context: "path".to_string(),
        });
    }
    let result = find_path(graph, source, target, mask, opts)?;
    path.extend(result.nodes);
    Ok(result.stats)
}

/// Unit-weight shortest path from `source` to the nearest node matching
/// `target`, avoiding masked nodes
///
/// The frontier is ordered by distance, then node id, so among destinations
/// at equal distance the smallest id is reached first.
#[tracing::instrument(skip(graph, target, mask, opts), fields(source = source, destinations = target.len(), masked = mask.is_some()))]
pub fn find_path(
    graph: &dyn Graph,
    source: NodeId,
    target: Target<'_>,
    mask: Option<&Mask>,
    opts: &SearchOptions,
) -> Result<PathResult> {
    check_source(graph, source)?;
    check_target(graph, &target)?;
    check_mask(graph, mask)?;

    let node_count = graph.node_count();
    let mut state = SearchState::new(graph, source);

    while let Some((_, node)) = state.frontier.pop_min() {
        if target.matches(node) {
            let nodes = reconstruct_path(node, &state.prev);
            tracing::debug!(
                reached = node,
                hops = nodes.len() - 1,
                expanded = state.stats.expanded,
                relaxed = state.stats.relaxed,
                "path_found"
            );
            return Ok(PathResult {
                source,
                reached: node,
                nodes,
                stats: state.stats,
            });
        }

        check_limits(&state.stats, opts)?;
        state.stats.record_expansion();

        let candidate = state.dist[node] + 1;
        for nbr in graph.neighbors(node) {
            check_neighbor(node_count, nbr)?;
            if !is_passable(mask, nbr) {
                continue;
            }
            state.relax(node, nbr, candidate);
        }
    }

    tracing::debug!(expanded = state.stats.expanded, "frontier_exhausted");
    Err(GraphError::NoPathFound {
        source_node: source,
    })
}

/// Shortest path from `source` to `dest`
pub fn shortest_path(graph: &dyn Graph, source: NodeId, dest: NodeId) -> Result<PathResult> {
    find_path(
        graph,
        source,
        Target::Node(dest),
        None,
        &SearchOptions::default(),
    )
}

/// Shortest path from `source` to `dest` that avoids every masked node
pub fn shortest_path_masked(
    graph: &dyn Graph,
    source: NodeId,
    dest: NodeId,
    mask: &Mask,
) -> Result<PathResult> {
    find_path(
        graph,
        source,
        Target::Node(dest),
        Some(mask),
        &SearchOptions::default(),
    )
}

/// Shortest path from `source` to whichever member of `dests` is nearest
pub fn shortest_path_to_any(
    graph: &dyn Graph,
    source: NodeId,
    dests: &BTreeSet<NodeId>,
    mask: Option<&Mask>,
) -> Result<PathResult> {
    find_path(
        graph,
        source,
        Target::AnyOf(dests),
        mask,
        &SearchOptions::default(),
    )
}
