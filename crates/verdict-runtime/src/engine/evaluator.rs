//! Decision tree evaluator
//!
//! Walks a tree against a record and produces a verdict. Evaluation is a
//! pure function of its inputs, so one tree can be evaluated concurrently
//! against many records.

use crate::engine::operators::compare_values;
use crate::error::{Result, RuntimeError};
use verdict_core::ast::{Comparison, Connective, DecisionTree, LogicalNode};
use verdict_core::Record;

/// Decision tree evaluator
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    short_circuit: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            short_circuit: true,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// When disabled, both branches of every logical node are evaluated
    pub fn with_short_circuit(mut self, enabled: bool) -> Self {
        self.short_circuit = enabled;
        self
    }

    pub fn short_circuit(&self) -> bool {
        self.short_circuit
    }

    /// Evaluate `tree` against `record`
    pub fn evaluate(&self, tree: &DecisionTree, record: &Record) -> Result<bool> {
        match tree {
            DecisionTree::Comparison(comparison) => self.evaluate_comparison(comparison, record),
            DecisionTree::Logical(node) => self.evaluate_logical(node, record),
        }
    }

    fn evaluate_comparison(&self, comparison: &Comparison, record: &Record) -> Result<bool> {
        let value = record
            .get(&comparison.field)
            .ok_or_else(|| RuntimeError::FieldNotFound(comparison.field.clone()))?;

        let result = compare_values(value, &comparison.literal, comparison.operator)?;

        tracing::trace!(
            "Comparison {} against {:?} -> {}",
            comparison,
            value,
            result
        );

        Ok(result)
    }

    fn evaluate_logical(&self, node: &LogicalNode, record: &Record) -> Result<bool> {
        let left = self.evaluate(&node.left, record)?;

        if self.short_circuit {
            match (node.connective, left) {
                (Connective::And, false) => return Ok(false),
                (Connective::Or, true) => return Ok(true),
                _ => {}
            }
        }

        let right = self.evaluate(&node.right, record)?;

        Ok(match node.connective {
            Connective::And => left && right,
            Connective::Or => left || right,
        })
    }
}

/// Evaluate a tree with short-circuiting enabled
pub fn evaluate(tree: &DecisionTree, record: &Record) -> Result<bool> {
    Evaluator::new().evaluate(tree, record)
}
