//! Evaluation engine module
//!
//! Provides the decision tree evaluator and the comparison operators it uses.

pub mod evaluator;
pub mod operators;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use evaluator::{evaluate, Evaluator};
pub use operators::compare_values;
