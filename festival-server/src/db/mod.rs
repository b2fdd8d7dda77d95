//! Database layer - connection pool, schema, and stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One statement per operation, no explicit transactions
//! - Rely on DB constraints, handle violations - no check-then-insert

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::DbError;
pub use store::{FestivalStore, PgStore};
