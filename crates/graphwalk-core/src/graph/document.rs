//! Graph documents: on-disk descriptions of graphs and meshes
//!
//! A document is a JSON or TOML table tagged by `kind`:
//!
//! ```json
//! { "kind": "edges", "nodes": 4, "edges": [[0, 1], [1, 2]], "directed": false }
//! { "kind": "adjacency", "adjacency": [[1], [0, 2], [1]] }
//! { "kind": "surface", "vertices": 4, "faces": [[0, 1, 2], [0, 2, 3]] }
//! { "kind": "volume", "vertices": 8, "cells": [[[0, 1, 2], ...], ...] }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;
use crate::graph::AdjacencyList;
use crate::mesh::{SurfaceMesh, VolumeMesh};

/// Nodes a document may declare beyond those its edges, faces or cells
/// reference
pub const MAX_UNREFERENCED_NODES: usize = 1 << 24;

/// Which adjacency of a document to traverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Nodes of a graph, or mesh vertices
    #[default]
    Primal,
    /// Mesh faces (surfaces) or cells (volumes)
    Dual,
}

impl FromStr for View {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "primal" | "vertex" => Ok(View::Primal),
            "dual" | "face" | "cell" => Ok(View::Dual),
            other => Err(GraphError::invalid_value("view", other)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Primal => write!(f, "primal"),
            View::Dual => write!(f, "dual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphDocument {
    Adjacency {
        adjacency: Vec<Vec<NodeId>>,
    },
    Edges {
        nodes: usize,
        edges: Vec<[NodeId; 2]>,
        #[serde(default)]
        directed: bool,
    },
    Surface {
        vertices: usize,
        faces: Vec<Vec<NodeId>>,
    },
    Volume {
        vertices: usize,
        cells: Vec<Vec<Vec<NodeId>>>,
    },
}

impl GraphDocument {
    /// Load a document, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GraphDocument::Adjacency { .. } => "adjacency",
            GraphDocument::Edges { .. } => "edges",
            GraphDocument::Surface { .. } => "surface",
            GraphDocument::Volume { .. } => "volume",
        }
    }

    /// Reject a node or vertex count far beyond what the document references
    fn check_declared_count(&self) -> Result<()> {
        let (what, declared, referenced) = match self {
            GraphDocument::Adjacency { .. } => return Ok(()),
            GraphDocument::Edges { nodes, edges, .. } => {
                ("nodes", *nodes, edges.len().saturating_mul(2))
            }
            GraphDocument::Surface { vertices, faces } => {
                ("vertices", *vertices, faces.iter().map(Vec::len).sum())
            }
            GraphDocument::Volume { vertices, cells } => (
                "vertices",
                *vertices,
                cells.iter().flatten().map(Vec::len).sum(),
            ),
        };
        if declared > referenced.saturating_add(MAX_UNREFERENCED_NODES) {
            crate::bail_document!(
                "{} declares {} {} but references at most {}",
                self.kind(),
                declared,
                what,
                referenced
            );
        }
        Ok(())
    }

    /// Build the adjacency for `view`
    #[tracing::instrument(skip(self, view), fields(kind = self.kind(), view = %view))]
    pub fn build(&self, view: View) -> Result<AdjacencyList> {
        self.check_declared_count()?;
        match (self, view) {
            (GraphDocument::Adjacency { adjacency }, View::Primal) => {
                AdjacencyList::new(adjacency.clone())
            }
            (
                GraphDocument::Edges {
                    nodes,
                    edges,
                    directed,
                },
                View::Primal,
            ) => AdjacencyList::from_edges(*nodes, edges.iter().map(|[a, b]| (*a, *b)), *directed),
            (GraphDocument::Surface { vertices, faces }, view) => {
                let mesh = SurfaceMesh::new(*vertices, faces.clone())?;
                Ok(match view {
                    View::Primal => mesh.into_vertex_graph(),
                    View::Dual => mesh.into_face_graph(),
                })
            }
            (GraphDocument::Volume { vertices, cells }, view) => {
                let mesh = VolumeMesh::new(*vertices, cells.clone())?;
                Ok(match view {
                    View::Primal => mesh.into_vertex_graph(),
                    View::Dual => mesh.into_cell_graph(),
                })
            }
            (doc, View::Dual) => Err(GraphError::invalid_document(format!(
                "{} documents have no dual view",
                doc.kind()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{shortest_path, Graph};
    use tempfile::tempdir;

    #[test]
    fn test_parse_edges_json() {
        let doc = GraphDocument::from_json_str(
            r#"{ "kind": "edges", "nodes": 3, "edges": [[0, 1], [1, 2]] }"#,
        )
        .unwrap();
        assert_eq!(doc.kind(), "edges");
        let graph = doc.build(View::Primal).unwrap();
        assert_eq!(graph.neighbors(1), vec![0, 2]);
    }

    #[test]
    fn test_parse_adjacency_toml() {
        let doc = GraphDocument::from_toml_str(
            "kind = \"adjacency\"\nadjacency = [[1], [2], []]\n",
        )
        .unwrap();
        let graph = doc.build(View::Primal).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(shortest_path(&graph, 0, 2).unwrap().nodes, vec![2, 1, 0]);
    }

    #[test]
    fn test_surface_dual_view() {
        let doc = GraphDocument::Surface {
            vertices: 4,
            faces: vec![vec![0, 1, 2], vec![0, 2, 3]],
        };
        let faces = doc.build(View::Dual).unwrap();
        assert_eq!(faces.node_count(), 2);
        assert_eq!(faces.neighbors(0), vec![1]);

        let verts = doc.build(View::Primal).unwrap();
        assert_eq!(verts.node_count(), 4);
        assert_eq!(verts.neighbors(0), vec![1, 2, 3]);
    }

    #[test]
    fn test_plain_graph_has_no_dual() {
        let doc = GraphDocument::Adjacency {
            adjacency: vec![vec![]],
        };
        let err = doc.build(View::Dual).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDocument { .. }));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();
        let json = dir.path().join("g.json");
        fs::write(&json, r#"{"kind": "adjacency", "adjacency": [[1], [0]]}"#).unwrap();
        assert_eq!(
            GraphDocument::load(&json).unwrap(),
            GraphDocument::Adjacency {
                adjacency: vec![vec![1], vec![0]]
            }
        );

        let toml_path = dir.path().join("g.toml");
        fs::write(&toml_path, "kind = \"edges\"\nnodes = 2\nedges = [[0, 1]]\ndirected = true\n")
            .unwrap();
        assert_eq!(
            GraphDocument::load(&toml_path).unwrap(),
            GraphDocument::Edges {
                nodes: 2,
                edges: vec![[0, 1]],
                directed: true
            }
        );

        let other = dir.path().join("g.yaml");
        fs::write(&other, "kind: edges").unwrap();
        assert!(matches!(
            GraphDocument::load(&other),
            Err(GraphError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_node_count() {
        let doc = GraphDocument::from_json_str(
            r#"{"kind": "edges", "nodes": 18446744073709551615, "edges": []}"#,
        )
        .unwrap();
        let err = doc.build(View::Primal).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDocument { .. }));

        let doc = GraphDocument::Surface {
            vertices: usize::MAX,
            faces: vec![vec![0, 1, 2]],
        };
        assert!(matches!(
            doc.build(View::Dual),
            Err(GraphError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn test_isolated_nodes_within_limit() {
        let doc = GraphDocument::Edges {
            nodes: 1000,
            edges: vec![],
            directed: false,
        };
        let graph = doc.build(View::Primal).unwrap();
        assert_eq!(graph.node_count(), 1000);
        assert!(graph.neighbors(999).is_empty());
    }

    #[test]
    fn test_unknown_kind_is_json_error() {
        let err = GraphDocument::from_json_str(r#"{"kind": "hypergraph"}"#).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("primal".parse::<View>().unwrap(), View::Primal);
        assert_eq!("Face".parse::<View>().unwrap(), View::Dual);
        assert_eq!("cell".parse::<View>().unwrap(), View::Dual);
        assert!("diagonal".parse::<View>().is_err());
    }
}
