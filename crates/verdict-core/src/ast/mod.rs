//! Abstract Syntax Tree (AST) definitions for Verdict
//!
//! This module contains the decision tree node definitions and the
//! operators they are built from.

pub mod operator;
pub mod tree;

pub use operator::{Connective, Operator};
pub use tree::{is_identifier, Comparison, DecisionTree, LogicalNode};
