//! Repository implementations for PostgreSQL access
//!
//! Each repository follows these patterns:
//! - One statement per operation (gets use a JOIN, no N+1)
//! - Rely on DB constraints and map violations, no check-then-insert
//! - Zero affected rows means NotFound

pub mod festivals;
pub mod performances;

pub use festivals::FestivalRepo;
pub use performances::PerformanceRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver or constraint failure; the text is returned to callers as-is
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    pub(crate) fn festival_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Festival",
            id,
        }
    }

    pub(crate) fn performance_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Performance",
            id,
        }
    }
}
