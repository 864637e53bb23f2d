//! API module for stepgraph.
//!
//! This module provides the HTTP REST API built with Axum:
//! - `/health` - Health check endpoint
//! - `/v1/graphs` - Register a graph, returns its identifier
//! - `/v1/run` - Run the algorithm, returns the full step trace

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

// Re-exports
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{AppState, SharedState};
pub use routes::create_router;
pub use types::*;
