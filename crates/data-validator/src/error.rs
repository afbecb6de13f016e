//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Count field with a fractional part
    #[error("{field} must be a whole number, got {value}")]
    NotWhole { field: &'static str, value: f64 },
}
