//! Route handlers organized by resource

pub mod festivals;
pub mod health;
pub mod performances;
