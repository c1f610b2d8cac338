//! trivia-server: HTTP API for a trivia quiz
//!
//! Lists categories, pages and searches questions, creates and deletes
//! them, and serves quiz rounds that never repeat a question.
//!
//! Storage sits behind [`db::TriviaStore`]: Postgres in production,
//! an in-memory store for tests and demos.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, parse_origins, run_server, ServerConfig, ServerError};
