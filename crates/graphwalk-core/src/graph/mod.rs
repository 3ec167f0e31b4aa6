//! Graph traversal and path-finding operations
//!
//! Provides the traversal engine over any adjacency source:
//! - Flood fill reachability, optionally masked
//! - Unit-weight shortest paths to one or many destinations
//! - Graph trait for pluggable adjacency (plain graphs, mesh views)

pub mod adjacency;
pub mod algos;
pub mod document;
pub mod frontier;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyList;
pub use algos::{
    find_path, find_path_into, flood_fill, flood_fill_masked, reach, reach_into, shortest_path,
    shortest_path_masked, shortest_path_to_any,
};
pub use document::{GraphDocument, View};
pub use frontier::Frontier;
pub use traversal::Graph;
pub use types::{Mask, NodeId, PathResult, ReachResult, SearchOptions, Target, TraversalStats};
