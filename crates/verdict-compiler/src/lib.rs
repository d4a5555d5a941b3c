//! Verdict Compiler - decision tree combiner
//!
//! This crate merges decision trees produced by the parser into a single
//! tree, and validates trees received from outside before they are used.

pub mod combiner;
pub mod error;
pub mod validator;

// Re-export main types
pub use combiner::{combine, majority_connective, Combiner, VoteTally};
pub use error::{CombineError, Result};
pub use validator::{Diagnostic, DiagnosticSeverity, TreeValidator, ValidationResult};
