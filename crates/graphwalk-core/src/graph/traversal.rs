use crate::graph::types::NodeId;

/// Trait for providing graph adjacency to the traversal engine
///
/// Implementations must be pure: `neighbors` returns the same sequence for
/// the same node on every call and never mutates shared state, so one graph
/// can serve many traversals at once.
pub trait Graph {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    fn node_count(&self) -> usize;

    /// Any value at least as large as the longest simple path, in edges.
    /// The node count always qualifies.
    fn edge_count_upper_bound(&self) -> usize {
        self.node_count()
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        (**self).neighbors(node)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn edge_count_upper_bound(&self) -> usize {
        (**self).edge_count_upper_bound()
    }
}

impl<G: Graph + ?Sized> Graph for Box<G> {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        (**self).neighbors(node)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn edge_count_upper_bound(&self) -> usize {
        (**self).edge_count_upper_bound()
    }
}
