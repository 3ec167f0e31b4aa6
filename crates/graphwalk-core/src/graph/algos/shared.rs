use crate::error::{GraphError, Result};
use crate::graph::types::{Mask, NodeId, SearchOptions, Target, TraversalStats};
use crate::graph::Graph;

/// Check that the source is a valid node of the graph
pub fn check_source(graph: &dyn Graph, source: NodeId) -> Result<()> {
    let bound = graph.node_count();
    if source >= bound {
        return Err(GraphError::invalid_index("source", source, bound));
    }
    Ok(())
}

/// Check that every destination is a valid node of the graph
pub fn check_target(graph: &dyn Graph, target: &Target<'_>) -> Result<()> {
    let bound = graph.node_count();
    let largest = match target {
        Target::Node(dest) => Some(*dest),
        Target::AnyOf(set) => set.last().copied(),
    };
    match largest {
        Some(dest) if dest >= bound => Err(GraphError::invalid_index("destination", dest, bound)),
        _ => Ok(()),
    }
}

/// Check that a mask, if any, has exactly one slot per node
pub fn check_mask(graph: &dyn Graph, mask: Option<&Mask>) -> Result<()> {
    let bound = graph.node_count();
    match mask {
        Some(mask) if mask.len() != bound => {
            Err(GraphError::invalid_index("mask length", mask.len(), bound))
        }
        _ => Ok(()),
    }
}

/// Check a neighbor id returned by the graph
pub fn check_neighbor(node_count: usize, nbr: NodeId) -> Result<()> {
    if nbr >= node_count {
        return Err(GraphError::invalid_index("neighbor", nbr, node_count));
    }
    Ok(())
}

/// Fail once the expansion budget is spent
pub fn check_limits(stats: &TraversalStats, opts: &SearchOptions) -> Result<()> {
    if let Some(max) = opts.max_expansions {
        if stats.expanded >= max {
            return Err(GraphError::ExpansionLimit { limit: max });
        }
    }
    Ok(())
}

pub fn is_passable(mask: Option<&Mask>, node: NodeId) -> bool {
    mask.is_none_or(|mask| !mask.is_blocked(node))
}
