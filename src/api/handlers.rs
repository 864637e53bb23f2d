//! API request handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::graph::{AdjacencyIndex, StepTraceEngine};
use crate::models::GraphSpec;
use crate::registry::GraphRepository;
use crate::services::{attach_narration, NarrationGenerator};

use super::error::{ApiError, ApiResult};
use super::types::*;

/// Application state shared across handlers
pub struct AppState {
    /// Registered graph repository
    pub registry: Arc<dyn GraphRepository>,

    /// Out-of-band narration generator
    pub narrator: Arc<dyn NarrationGenerator>,
}

/// Thread-safe shared state
pub type SharedState = Arc<AppState>;

// ============================================================================
// Health Check Handler
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "stepgraph".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        graphs_registered: state.registry.len(),
    })
}

// ============================================================================
// Register Graph Handler
// ============================================================================

/// Register a graph and hand back its identifier
pub async fn register_graph(
    State(state): State<SharedState>,
    Json(request): Json<RegisterGraphRequest>,
) -> ApiResult<Json<RegisterGraphResponse>> {
    if request.nodes.is_empty() {
        return Err(ApiError::ValidationError(
            "Graph must declare at least one node".to_string(),
        ));
    }

    // Dijkstra is undefined for negative weights, so these are rejected up
    // front. Edge endpoints are NOT validated against the node set: unknown
    // endpoints are tolerated and create extra adjacency entries at run time.
    if let Some(edge) = request.edges.iter().find(|e| e.weight < 0.0) {
        return Err(ApiError::ValidationError(format!(
            "Edge {}-{} has negative weight {}",
            edge.from, edge.to, edge.weight
        )));
    }

    let graph = GraphSpec {
        nodes: request.nodes,
        edges: request.edges,
        directed: request.directed,
    };

    let graph_id = state.registry.create(graph);
    info!(%graph_id, "graph registered");

    Ok(Json(RegisterGraphResponse {
        success: true,
        graph_id,
    }))
}

// ============================================================================
// Run Handler
// ============================================================================

/// Run the algorithm against a registered graph, returning the full trace
pub async fn run_trace(
    State(state): State<SharedState>,
    Json(request): Json<RunRequest>,
) -> ApiResult<Json<RunResponse>> {
    let graph = state
        .registry
        .get(&request.graph_id)
        .ok_or_else(|| ApiError::NotFound(format!("graph {} is not registered", request.graph_id)))?;

    let adjacency = AdjacencyIndex::build(&graph);
    let trace = StepTraceEngine::new(&graph, &adjacency, &request.start).run()?;

    let mut steps = trace.steps;
    attach_narration(&mut steps, state.narrator.as_ref());

    debug!(
        graph_id = %request.graph_id,
        start = %request.start,
        steps = steps.len(),
        "trace produced"
    );

    Ok(Json(RunResponse {
        success: true,
        step_count: steps.len(),
        steps,
    }))
}
