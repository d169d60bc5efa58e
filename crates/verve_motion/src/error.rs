//! Spring motion error types

use thiserror::Error;

/// Errors raised when constructing a motion from degenerate spring parameters
#[derive(Error, Debug)]
pub enum SpringError {
    /// Mass must be strictly positive; every coefficient divides by it.
    #[error("Spring mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// A spring parameter was NaN or infinite.
    #[error("Spring {name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

/// Result type for spring motion construction
pub type Result<T> = std::result::Result<T, SpringError>;
