//! Verdict Parser - rule text to decision tree parser
//!
//! This crate turns human-written boolean comparison rules such as
//! `age > 30 AND (department == "Sales" OR salary >= 50000)` into
//! `DecisionTree` structures.

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use parser::{parse, RuleParser};
