//! Verdict Runtime - decision tree evaluator
//!
//! This crate evaluates decision trees against records of field values
//! and returns a boolean verdict.

pub mod engine;
pub mod error;

// Re-export main types
pub use engine::{compare_values, evaluate, Evaluator};
pub use error::{Result, RuntimeError};
