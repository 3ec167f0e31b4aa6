//! Mesh connectivity as traversable graphs
//!
//! Meshes expose two adjacency views:
//! - primal: vertices joined by mesh edges
//! - dual: faces sharing an edge (surfaces) or cells sharing a face (volumes)
//!
//! Both views are plain [`AdjacencyList`](crate::graph::AdjacencyList)s
//! with neighbors in ascending order, so any traversal in [`crate::graph`] runs on them unchanged.

pub mod surface;
pub mod volume;

pub use surface::SurfaceMesh;
pub use volume::VolumeMesh;

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::types::NodeId;

/// Undirected edge key, smaller id first
fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Consecutive vertex pairs around a closed polygon
fn polygon_edges(poly: &[NodeId]) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
}

fn check_polygon(poly: &[NodeId], num_vertices: usize, what: &str) -> Result<()> {
    if poly.len() < 3 {
        crate::bail_document!("{} has {} vertices (need at least 3)", what, poly.len());
    }
    let mut distinct = poly.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() != poly.len() {
        crate::bail_document!("{} repeats a vertex", what);
    }
    if let Some(&bad) = poly.iter().find(|&&v| v >= num_vertices) {
        crate::bail_document!(
            "{} references vertex {} but the mesh has {} vertices",
            what,
            bad,
            num_vertices
        );
    }
    Ok(())
}

/// Pairs of elements that share a key, each pair once per shared key
fn dual_edges<K: Eq + Hash>(incidence: HashMap<K, Vec<NodeId>>) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    for elements in incidence.into_values() {
        for (i, &a) in elements.iter().enumerate() {
            for &b in &elements[i + 1..] {
                if a != b {
                    edges.push((a, b));
                }
            }
        }
    }
    edges
}
