//! Domain models with validation at construction
//!
//! Write shapes (`NewFestival`, `NewPerformance`) can only be built through
//! their validating constructors. Invalid input returns ValidationError,
//! not panic.

pub mod dates;
pub mod festival;
pub mod location;
pub mod performance;
pub mod validation;

pub use festival::{Festival, NewFestival};
pub use location::{Location, LocationError};
pub use performance::{NewPerformance, Performance};
pub use validation::ValidationError;
