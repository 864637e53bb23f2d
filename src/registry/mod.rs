//! Graph registry.
//!
//! Registered graphs are immutable; the registry is the only shared mutable
//! structure in the system and only needs concurrent insert and lookup. It is
//! injected into the API state rather than living as process-global state, so
//! callers control its lifetime.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;
use uuid::Uuid;

use crate::models::GraphSpec;

/// Repository of registered graphs.
pub trait GraphRepository: Send + Sync {
    /// Stores a graph and returns its opaque identifier.
    fn create(&self, graph: GraphSpec) -> Uuid;

    /// Looks up a registered graph by identifier.
    fn get(&self, id: &Uuid) -> Option<Arc<GraphSpec>>;

    /// Number of registered graphs.
    fn len(&self) -> usize;

    /// Whether the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory registry backed by a `RwLock`-guarded map.
#[derive(Default)]
pub struct InMemoryGraphRegistry {
    graphs: RwLock<HashMap<Uuid, Arc<GraphSpec>>>,
}

impl InMemoryGraphRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphRepository for InMemoryGraphRegistry {
    fn create(&self, graph: GraphSpec) -> Uuid {
        let id = Uuid::new_v4();
        debug!(graph_id = %id, nodes = graph.nodes.len(), edges = graph.edges.len(), "registering graph");

        if let Ok(mut graphs) = self.graphs.write() {
            graphs.insert(id, Arc::new(graph));
        }

        id
    }

    fn get(&self, id: &Uuid) -> Option<Arc<GraphSpec>> {
        self.graphs.read().ok()?.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.graphs.read().map(|g| g.len()).unwrap_or(0)
    }
}
