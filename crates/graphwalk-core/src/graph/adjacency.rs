//! Plain adjacency-list graphs

use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;
use crate::graph::Graph;

/// Owned adjacency lists, one per node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<NodeId>>,
    entries: usize,
}

impl AdjacencyList {
    /// Wrap existing adjacency lists, keeping their order
    pub fn new(lists: Vec<Vec<NodeId>>) -> Result<Self> {
        let bound = lists.len();
        for nbrs in &lists {
            if let Some(&bad) = nbrs.iter().find(|&&nbr| nbr >= bound) {
                return Err(GraphError::invalid_index("neighbor", bad, bound));
            }
        }
        let entries = lists.iter().map(Vec::len).sum();
        Ok(Self { lists, entries })
    }

    /// Build from an edge list. Neighbor lists come out sorted and
    /// deduplicated; undirected edges are stored in both directions.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
        directed: bool,
    ) -> Result<Self> {
        let mut lists: Vec<Vec<NodeId>> = Vec::new();
        lists.try_reserve_exact(node_count).map_err(|_| {
            GraphError::invalid_document(format!("cannot allocate {} nodes", node_count))
        })?;
        lists.resize_with(node_count, Vec::new);
        for (a, b) in edges {
            if a >= node_count {
                return Err(GraphError::invalid_index("edge endpoint", a, node_count));
            }
            if b >= node_count {
                return Err(GraphError::invalid_index("edge endpoint", b, node_count));
            }
            lists[a].push(b);
            if !directed {
                lists[b].push(a);
            }
        }
        for nbrs in &mut lists {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self::new(lists)
    }

    /// Undirected ring `0-1-...-(n-1)-0`
    pub fn cycle(node_count: usize) -> Result<Self> {
        let edges = (0..node_count).map(|i| (i, (i + 1) % node_count));
        Self::from_edges(node_count, edges, false)
    }

    pub fn lists(&self) -> &[Vec<NodeId>] {
        &self.lists
    }
}

impl Graph for AdjacencyList {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.lists.get(node).cloned().unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn edge_count_upper_bound(&self) -> usize {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_undirected() {
        let graph = AdjacencyList::from_edges(3, [(0, 1), (2, 1), (1, 0)], false).unwrap();
        assert_eq!(graph.neighbors(0), vec![1]);
        assert_eq!(graph.neighbors(1), vec![0, 2]);
        assert_eq!(graph.neighbors(2), vec![1]);
        assert_eq!(graph.edge_count_upper_bound(), 4);
    }

    #[test]
    fn test_from_edges_directed() {
        let graph = AdjacencyList::from_edges(3, [(0, 1), (1, 2)], true).unwrap();
        assert_eq!(graph.neighbors(0), vec![1]);
        assert_eq!(graph.neighbors(2), Vec::<NodeId>::new());
    }

    #[test]
    fn test_from_edges_rejects_bad_endpoint() {
        let err = AdjacencyList::from_edges(2, [(0, 5)], false).unwrap_err();
        assert!(matches!(err, GraphError::InvalidIndex { index: 5, .. }));
    }

    #[test]
    fn test_new_rejects_bad_neighbor() {
        let err = AdjacencyList::new(vec![vec![1], vec![2]]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidIndex {
                index: 2,
                bound: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_cycle() {
        let graph = AdjacencyList::cycle(5).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.neighbors(0), vec![1, 4]);
        assert_eq!(graph.neighbors(4), vec![0, 3]);
    }

    #[test]
    fn test_neighbors_out_of_range_is_empty() {
        let graph = AdjacencyList::cycle(3).unwrap();
        assert!(graph.neighbors(10).is_empty());
    }

    #[test]
    fn test_from_edges_unallocatable_count() {
        let err = AdjacencyList::from_edges(usize::MAX, [], false).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDocument { .. }));
    }
}
