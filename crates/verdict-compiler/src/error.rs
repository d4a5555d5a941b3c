//! Combiner error types

use thiserror::Error;

/// Combiner error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombineError {
    /// Fewer than two trees were supplied
    #[error("At least two rules are required to combine, got {0}")]
    TooFewTrees(usize),

    /// One of the supplied trees violates the decision tree invariants
    #[error("Rule {index} is malformed at {path}: {reason}")]
    MalformedTree {
        index: usize,
        path: String,
        reason: String,
    },

    /// The combined tree would be deeper than the accepted limit
    #[error("Combined rule would be {depth} levels deep, the limit is {limit}")]
    ResultTooDeep { depth: usize, limit: usize },
}

/// Result type for combiner operations
pub type Result<T> = std::result::Result<T, CombineError>;
