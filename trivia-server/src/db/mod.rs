//! Database layer - connection pool, repositories and the store seam
//!
//! Handlers only see [`TriviaStore`]. [`PgStore`] backs it with Postgres
//! through the per-table repositories; [`MemoryStore`] keeps everything in
//! process for tests and demo runs.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, DbError, QuestionRepo};
pub use store::{PgStore, QuestionFilter, TriviaStore};
