//! Graph domain types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A weighted edge between two named vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source vertex identifier.
    pub from: String,

    /// Target vertex identifier.
    pub to: String,

    /// Non-negative edge weight.
    pub weight: f64,
}

impl EdgeSpec {
    /// Creates a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The edge identifier used in highlight payloads ("from-to").
    pub fn id(&self) -> String {
        edge_id(&self.from, &self.to)
    }
}

/// Formats the edge identifier the rendering client keys on.
pub fn edge_id(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

/// A registered graph: a vertex set and an edge list.
///
/// Immutable for the duration of any run against it; the registry hands out
/// shared references, never copies that could drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSpec {
    /// Unique vertex identifiers.
    pub nodes: Vec<String>,

    /// Weighted edges between vertices.
    pub edges: Vec<EdgeSpec>,

    /// Accepted for wire compatibility but not honored: adjacency is always
    /// built symmetrically regardless of this flag.
    #[serde(default)]
    pub directed: bool,
}

impl GraphSpec {
    /// Creates a graph from vertex ids and edges.
    pub fn new(nodes: Vec<String>, edges: Vec<EdgeSpec>) -> Self {
        Self {
            nodes,
            edges,
            directed: false,
        }
    }

    /// Whether the given vertex is in the declared vertex set.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }
}
