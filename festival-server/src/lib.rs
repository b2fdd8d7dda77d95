//! festival-server: HTTP CRUD service for festivals and performances
//!
//! Festivals own performances; both live in PostgreSQL (or in memory for
//! development). The HTTP layer decodes and validates input, calls one
//! `FestivalStore` operation, and encodes the result as JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, FestivalStore, MemoryStore, PgStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Festival, Location, NewFestival, NewPerformance, Performance};
