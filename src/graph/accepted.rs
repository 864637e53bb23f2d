//! Accepted shortest-path-tree sets.
//!
//! Pure functions of the predecessor map. Called after every mutating step so
//! each step's accepted payload is self-contained: recomputing from Pre as of
//! that step reproduces exactly what the step recorded, which is what lets a
//! client seek to an arbitrary index.

use std::collections::BTreeSet;

use crate::models::edge_id;

use super::engine::Predecessors;

/// Accepted node and edge sets derived from a predecessor map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptedSets {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl AcceptedSets {
    /// Derives both sets from the current predecessor map.
    pub fn from_predecessors(pre: &Predecessors, start: &str) -> Self {
        Self {
            nodes: accepted_nodes(pre, start),
            edges: accepted_edges(pre),
        }
    }
}

/// Edges currently in the accepted tree: `Pre[v]-v` for every v with a
/// predecessor. Sorted by vertex so recomputation is order-stable.
pub fn accepted_edges(pre: &Predecessors) -> Vec<String> {
    pre.iter()
        .filter_map(|(v, p)| p.as_ref().map(|p| edge_id(p, v)))
        .collect()
}

/// Nodes currently in the accepted tree: the start vertex plus both ends of
/// every accepted edge.
pub fn accepted_nodes(pre: &Predecessors, start: &str) -> Vec<String> {
    let mut set = BTreeSet::new();
    set.insert(start.to_string());

    for (v, p) in pre {
        if let Some(p) = p {
            set.insert(v.clone());
            set.insert(p.clone());
        }
    }

    set.into_iter().collect()
}
