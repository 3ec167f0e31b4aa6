use std::collections::HashMap;

use crate::error::Result;
use crate::graph::types::NodeId;
use crate::graph::AdjacencyList;
use crate::mesh::{check_polygon, dual_edges, polygon_edges};

/// Polyhedral volume mesh; each cell is a list of polygonal faces
#[derive(Debug, Clone)]
pub struct VolumeMesh {
    cells: Vec<Vec<Vec<NodeId>>>,
    face_count: usize,
    vertex_adjacency: AdjacencyList,
    cell_adjacency: AdjacencyList,
}

impl VolumeMesh {
    /// Build a mesh from `num_vertices` vertices and cells. Two cells are
    /// adjacent when they list a face with the same vertex set, whatever its
    /// winding.
    pub fn new(num_vertices: usize, cells: Vec<Vec<Vec<NodeId>>>) -> Result<Self> {
        let mut vertex_edges = Vec::new();
        let mut face_cells: HashMap<Vec<NodeId>, Vec<NodeId>> = HashMap::new();

        for (cid, cell) in cells.iter().enumerate() {
            if cell.len() < 4 {
                crate::bail_document!("cell {} has {} faces (need at least 4)", cid, cell.len());
            }
            for (fid, face) in cell.iter().enumerate() {
                check_polygon(face, num_vertices, &format!("cell {} face {}", cid, fid))?;
                vertex_edges.extend(polygon_edges(face));

                let mut key = face.clone();
                key.sort_unstable();
                face_cells.entry(key).or_default().push(cid);
            }
        }

        let face_count = face_cells.len();
        let vertex_adjacency = AdjacencyList::from_edges(num_vertices, vertex_edges, false)?;
        let cell_adjacency = AdjacencyList::from_edges(cells.len(), dual_edges(face_cells), false)?;

        tracing::debug!(
            vertices = num_vertices,
            cells = cells.len(),
            faces = face_count,
            "volume_mesh_built"
        );

        Ok(Self {
            cells,
            face_count,
            vertex_adjacency,
            cell_adjacency,
        })
    }

    /// Build a hexahedral mesh. Each hex lists its bottom quad `0..4` then
    /// the top quad `4..8`, with vertex `i + 4` above vertex `i`.
    pub fn from_hexahedra(num_vertices: usize, hexes: &[[NodeId; 8]]) -> Result<Self> {
        let cells = hexes.iter().map(hexahedron_faces).collect();
        Self::new(num_vertices, cells)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_adjacency.lists().len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of distinct faces
    pub fn num_faces(&self) -> usize {
        self.face_count
    }

    pub fn cells(&self) -> &[Vec<Vec<NodeId>>] {
        &self.cells
    }

    /// Vertices joined by a face edge
    pub fn vertex_graph(&self) -> &AdjacencyList {
        &self.vertex_adjacency
    }

    /// Cells joined by a shared face
    pub fn cell_graph(&self) -> &AdjacencyList {
        &self.cell_adjacency
    }

    pub fn into_vertex_graph(self) -> AdjacencyList {
        self.vertex_adjacency
    }

    pub fn into_cell_graph(self) -> AdjacencyList {
        self.cell_adjacency
    }
}

fn hexahedron_faces(v: &[NodeId; 8]) -> Vec<Vec<NodeId>> {
    vec![
        vec![v[0], v[3], v[2], v[1]],
        vec![v[4], v[5], v[6], v[7]],
        vec![v[0], v[1], v[5], v[4]],
        vec![v[1], v[2], v[6], v[5]],
        vec![v[2], v[3], v[7], v[6]],
        vec![v[3], v[0], v[4], v[7]],
    ]
}
