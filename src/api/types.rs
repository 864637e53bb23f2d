//! API request/response types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EdgeSpec, Step};

// ============================================================================
// Health Check
// ============================================================================

/// Health check response
#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub graphs_registered: usize,
}

// ============================================================================
// Register Graph API
// ============================================================================

/// Request to register a graph for later runs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGraphRequest {
    /// Vertex identifiers
    pub nodes: Vec<String>,

    /// Weighted edges
    pub edges: Vec<EdgeSpec>,

    /// Accepted for compatibility; adjacency is always built symmetrically
    #[serde(default)]
    pub directed: bool,
}

/// Response from graph registration
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGraphResponse {
    pub success: bool,
    pub graph_id: Uuid,
}

// ============================================================================
// Run API
// ============================================================================

/// Request to run the algorithm against a registered graph
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    /// Identifier returned at registration
    pub graph_id: Uuid,

    /// Start vertex for the shortest-path run
    pub start: String,
}

/// Response carrying the full ordered step trace
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub success: bool,
    pub step_count: usize,
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_directed_flag() {
        let json = r#"{"nodes":["a","b"],"edges":[{"from":"a","to":"b","weight":1.5}],"directed":true}"#;
        let request: RegisterGraphRequest = serde_json::from_str(json).unwrap();

        assert!(request.directed);
        assert_eq!(request.edges[0].weight, 1.5);
    }

    #[test]
    fn test_run_request_field_names() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"graphId":"{}","start":"a"}}"#, id);
        let request: RunRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.graph_id, id);
        assert_eq!(request.start, "a");
    }
}
