//! Error types for Verdict Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Invalid connective: {0}")]
    InvalidConnective(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
