use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Integer handle into a graph's index space
pub type NodeId = usize;

/// Per-node traversal restriction: `true` marks a blocked node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// A mask of `len` nodes with nothing blocked
    pub fn open(len: usize) -> Self {
        Mask(vec![false; len])
    }

    /// Build a mask of `len` nodes blocking every id in `blocked`
    pub fn from_blocked(len: usize, blocked: impl IntoIterator<Item = NodeId>) -> Result<Self> {
        let mut mask = Mask::open(len);
        for id in blocked {
            mask.block(id)?;
        }
        Ok(mask)
    }

    pub fn block(&mut self, node: NodeId) -> Result<()> {
        let len = self.0.len();
        match self.0.get_mut(node) {
            Some(slot) => {
                *slot = true;
                Ok(())
            }
            None => Err(GraphError::invalid_index("mask entry", node, len)),
        }
    }

    /// Whether `node` is blocked. Ids past the end are treated as blocked.
    pub fn is_blocked(&self, node: NodeId) -> bool {
        self.0.get(node).copied().unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids of all blocked nodes, ascending
    pub fn blocked(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(id, &blocked)| blocked.then_some(id))
    }
}

impl From<Vec<bool>> for Mask {
    fn from(flags: Vec<bool>) -> Self {
        Mask(flags)
    }
}

/// Destination condition for a shortest-path search
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Stop at this node
    Node(NodeId),
    /// Stop at the first member of the set popped from the frontier
    AnyOf(&'a BTreeSet<NodeId>),
}

impl Target<'_> {
    pub fn matches(&self, node: NodeId) -> bool {
        match self {
            Target::Node(dest) => *dest == node,
            Target::AnyOf(set) => set.contains(&node),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Target::Node(_) => 1,
            Target::AnyOf(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        match self {
            Target::Node(dest) => vec![*dest],
            Target::AnyOf(set) => set.iter().copied().collect(),
        }
    }
}

/// Options shared by every traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fail with `ExpansionLimit` once this many nodes have been expanded
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    pub fn with_max_expansions(max_expansions: usize) -> Self {
        SearchOptions {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Counters recorded over a single traversal call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Nodes removed from the frontier and expanded
    pub expanded: usize,
    /// Successful distance improvements
    pub relaxed: usize,
    /// Frontier entries replaced by a better priority
    pub reinserted: usize,
}

impl TraversalStats {
    pub fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    pub fn record_relaxation(&mut self, replaced: bool) {
        self.relaxed += 1;
        if replaced {
            self.reinserted += 1;
        }
    }
}

/// Outcome of a flood fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachResult {
    pub source: NodeId,
    pub visited: BTreeSet<NodeId>,
    pub stats: TraversalStats,
}

impl ReachResult {
    pub fn contains(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Outcome of a shortest-path search
///
/// `nodes` runs from the reached destination back to the source, both
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: NodeId,
    pub reached: NodeId,
    pub nodes: Vec<NodeId>,
    pub stats: TraversalStats,
}

impl PathResult {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The path reordered from source to destination
    pub fn source_to_destination(&self) -> Vec<NodeId> {
        self.nodes.iter().rev().copied().collect()
    }
}
