//! Validation error types

use std::fmt;

/// Validation error for write models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// A range ends before it starts
    EndsBeforeStart {
        start: &'static str,
        end: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::EndsBeforeStart { start, end } => {
                write!(f, "{} cannot be before {}", end, start)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty or whitespace-only text.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Reject ranges whose end precedes their start.
pub(crate) fn require_ordered<T: PartialOrd>(
    start: (&'static str, &T),
    end: (&'static str, &T),
) -> Result<(), ValidationError> {
    if end.1 < start.1 {
        return Err(ValidationError::EndsBeforeStart {
            start: start.0,
            end: end.0,
        });
    }
    Ok(())
}
