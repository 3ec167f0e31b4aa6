use std::collections::HashMap;

use crate::error::Result;
use crate::graph::types::NodeId;
use crate::graph::AdjacencyList;
use crate::mesh::{check_polygon, dual_edges, edge_key, polygon_edges};

/// Polygonal surface mesh
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    faces: Vec<Vec<NodeId>>,
    edge_count: usize,
    vertex_adjacency: AdjacencyList,
    face_adjacency: AdjacencyList,
}

impl SurfaceMesh {
    /// Build a mesh from `num_vertices` vertices and faces listed as vertex
    /// loops. Faces need at least three vertices.
    pub fn new(num_vertices: usize, faces: Vec<Vec<NodeId>>) -> Result<Self> {
        let mut vertex_edges = Vec::new();
        let mut edge_faces: HashMap<(NodeId, NodeId), Vec<NodeId>> = HashMap::new();

        for (fid, face) in faces.iter().enumerate() {
            check_polygon(face, num_vertices, &format!("face {}", fid))?;
            for (a, b) in polygon_edges(face) {
                vertex_edges.push((a, b));
                edge_faces.entry(edge_key(a, b)).or_default().push(fid);
            }
        }

        let edge_count = edge_faces.len();
        let vertex_adjacency = AdjacencyList::from_edges(num_vertices, vertex_edges, false)?;
        let face_adjacency = AdjacencyList::from_edges(faces.len(), dual_edges(edge_faces), false)?;

        tracing::debug!(
            vertices = num_vertices,
            faces = faces.len(),
            edges = edge_count,
            "surface_mesh_built"
        );

        Ok(Self {
            faces,
            edge_count,
            vertex_adjacency,
            face_adjacency,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_adjacency.lists().len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of distinct undirected mesh edges
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn faces(&self) -> &[Vec<NodeId>] {
        &self.faces
    }

    /// Vertices joined by a face edge
    pub fn vertex_graph(&self) -> &AdjacencyList {
        &self.vertex_adjacency
    }

    /// Faces joined by a shared edge
    pub fn face_graph(&self) -> &AdjacencyList {
        &self.face_adjacency
    }

    pub fn into_vertex_graph(self) -> AdjacencyList {
        self.vertex_adjacency
    }

    pub fn into_face_graph(self) -> AdjacencyList {
        self.face_adjacency
    }
}
