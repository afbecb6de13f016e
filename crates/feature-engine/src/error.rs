//! Encoding Error Types

use thiserror::Error;

/// Errors during feature encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Label is not part of the field's category map
    #[error("unknown {field} category: {label:?}")]
    UnknownCategory { field: &'static str, label: String },
}
