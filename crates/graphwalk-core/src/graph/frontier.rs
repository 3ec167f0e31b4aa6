//! Ordered frontier for unit-weight search
//!
//! Entries are `(priority, node)` pairs ordered by priority, then by node id.
//! The search keeps at most one entry per node, so an entry can be located
//! and removed by its exact key when the node's distance improves.

use std::collections::BTreeSet;

use crate::graph::types::NodeId;

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: BTreeSet<(usize, NodeId)>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns `false` if the exact pair was already present.
    pub fn insert(&mut self, priority: usize, node: NodeId) -> bool {
        self.entries.insert((priority, node))
    }

    /// Remove and return the smallest entry
    pub fn pop_min(&mut self) -> Option<(usize, NodeId)> {
        self.entries.pop_first()
    }

    /// Remove the exact `(priority, node)` entry
    pub fn remove(&mut self, priority: usize, node: NodeId) -> bool {
        self.entries.remove(&(priority, node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
