//! Error types for Quetelet
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::input::Field;

/// Result type alias for Quetelet operations
pub type BmiResult<T> = Result<T, BmiError>;

/// Main error type for Quetelet operations
#[derive(Error, Debug)]
pub enum BmiError {
    /// Input token is not a parseable number
    #[error("expected a number for {field}, got '{token}'")]
    InvalidNumber { field: Field, token: String },

    /// Input stream ended before a value was supplied
    #[error("input ended before a {field} value was given")]
    UnexpectedEof { field: Field },

    /// Measurement is zero, negative, or not finite
    #[error("{field} must be a positive, finite number (got {value})")]
    OutOfRange { field: Field, value: f64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
