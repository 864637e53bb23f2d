//! Adjacency index construction.

#![allow(dead_code)]

use std::collections::HashMap;

use crate::models::{EdgeSpec, GraphSpec};

/// Two weights closer than this are treated as the same edge when
/// deduplicating input that already lists both directions.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// A neighbor entry in the adjacency index.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Neighboring vertex identifier.
    pub to: String,

    /// Weight of the connecting edge.
    pub weight: f64,
}

/// Symmetric adjacency index over a registered graph.
///
/// Every declared vertex keys an entry, even isolated ones. Edges are
/// inserted in both directions regardless of the graph's `directed` flag.
/// Endpoints absent from the declared vertex set create new entries rather
/// than failing; the engine only ever walks entries reachable from a declared
/// start vertex.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    map: HashMap<String, Vec<Neighbor>>,
}

impl AdjacencyIndex {
    /// Builds the index from a graph's vertex set and edge list.
    ///
    /// An entry is skipped when one with the same neighbor and an
    /// epsilon-equal weight already exists, so input that lists an undirected
    /// edge in both directions does not double it.
    pub fn build(graph: &GraphSpec) -> Self {
        let mut map: HashMap<String, Vec<Neighbor>> = HashMap::new();

        for vertex in &graph.nodes {
            map.entry(vertex.clone()).or_default();
        }

        for edge in &graph.edges {
            Self::insert(&mut map, &edge.from, &edge.to, edge.weight);
            Self::insert(&mut map, &edge.to, &edge.from, edge.weight);
        }

        Self { map }
    }

    fn insert(map: &mut HashMap<String, Vec<Neighbor>>, from: &str, to: &str, weight: f64) {
        let entries = map.entry(from.to_string()).or_default();

        let duplicate = entries
            .iter()
            .any(|n| n.to == to && (n.weight - weight).abs() < WEIGHT_EPSILON);

        if !duplicate {
            entries.push(Neighbor {
                to: to.to_string(),
                weight,
            });
        }
    }

    /// Neighbors of a vertex in insertion order; empty for unknown vertices.
    pub fn neighbors(&self, vertex: &str) -> &[Neighbor] {
        self.map.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The candidate edge set H for a just-finalized vertex: its adjacency
    /// materialized as outgoing edges.
    pub fn candidate_edges(&self, vertex: &str) -> Vec<EdgeSpec> {
        self.neighbors(vertex)
            .iter()
            .map(|n| EdgeSpec::new(vertex, n.to.clone(), n.weight))
            .collect()
    }

    /// Number of vertices the index knows about (declared plus any created
    /// by stray edge endpoints).
    pub fn vertex_count(&self) -> usize {
        self.map.len()
    }
}
