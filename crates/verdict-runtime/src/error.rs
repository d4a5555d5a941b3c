//! Runtime error types

use thiserror::Error;
use verdict_core::ast::Operator;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Field referenced by a comparison is absent from the record
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Relational comparator applied to operands that are not both numeric
    #[error("Type error: cannot apply '{operator}' to {left} and {right}, both operands must be numeric")]
    TypeError {
        operator: Operator,
        left: String,
        right: String,
    },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
