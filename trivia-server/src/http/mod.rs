//! HTTP server layer
//!
//! Axum server with:
//! - CORS for the quiz frontend
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, parse_origins, run_server, AppState, ServerConfig, ServerError};
