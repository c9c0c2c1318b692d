//! Error types for survey statistics
//!
//! Provides a unified error type for all survey-stats crates.

use thiserror::Error;

/// Core error type for survey statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A precondition on summary statistics or interval parameters was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The underlying distribution library failed
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a proportion outside [0, 1]
    pub fn invalid_proportion(p: f64) -> Self {
        Self::InvalidInput(format!("Proportion {p} must be in [0, 1]"))
    }

    /// Create an error for a coverage level outside (0, 1)
    pub fn invalid_coverage(level: f64) -> Self {
        Self::InvalidInput(format!("Coverage {level} must be in (0, 1)"))
    }

    /// Create an error for a quantity that must not be negative
    pub fn negative(what: &str, value: f64) -> Self {
        Self::InvalidInput(format!("{what} must be non-negative, got {value}"))
    }

    /// Create an error for a zero observation count
    pub fn empty_sample() -> Self {
        Self::InvalidInput("Sample count must be positive".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for finite inputs whose result overflows
    pub fn overflow(context: &str) -> Self {
        Self::InvalidInput(format!("{context} overflows to an infinite value"))
    }

    /// Whether this error reports a violated precondition
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
