//! Verdict Core - Core types and definitions for the Verdict rule engine
//!
//! This crate provides the fundamental types shared by the parser, the
//! combiner and the evaluator:
//! - Decision tree (AST) definitions and their wire format
//! - Record value types supplied at evaluation time
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{Comparison, Connective, DecisionTree, LogicalNode, Operator};
pub use error::{CoreError, Result};
pub use types::{Literal, Record, Value};
