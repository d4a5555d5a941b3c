//! Majority-connective combiner
//!
//! Merges several decision trees into one. Each input tree whose root is a
//! logical node votes for its connective; single comparisons abstain. The
//! connective with strictly more votes joins the trees, ties go to `AND`.
//! Trees are folded left to right without any simplification. A result
//! deeper than the validator's limit is rejected, so every combined tree can
//! be submitted again.

use crate::error::{CombineError, Result};
use crate::validator::TreeValidator;
use verdict_core::ast::{Connective, DecisionTree};

/// Votes cast by the roots of a set of trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub and: usize,
    pub or: usize,
}

impl VoteTally {
    /// Count the root connective of every tree
    pub fn count(trees: &[DecisionTree]) -> Self {
        trees
            .iter()
            .filter_map(DecisionTree::root_connective)
            .fold(Self::default(), |mut tally, connective| {
                match connective {
                    Connective::And => tally.and += 1,
                    Connective::Or => tally.or += 1,
                }
                tally
            })
    }

    /// Winning connective; `AND` unless `OR` has strictly more votes
    pub fn winner(&self) -> Connective {
        if self.or > self.and {
            Connective::Or
        } else {
            Connective::And
        }
    }
}

/// Connective the combiner would join these trees with
pub fn majority_connective(trees: &[DecisionTree]) -> Connective {
    VoteTally::count(trees).winner()
}

/// Combiner with the validator applied to every input tree
#[derive(Debug, Clone, Copy, Default)]
pub struct Combiner {
    validator: TreeValidator,
}

impl Combiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a validator with a custom depth limit
    pub fn with_validator(mut self, validator: TreeValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Combine two or more trees into one
    pub fn combine(&self, trees: Vec<DecisionTree>) -> Result<DecisionTree> {
        if trees.len() < 2 {
            return Err(CombineError::TooFewTrees(trees.len()));
        }

        for (index, tree) in trees.iter().enumerate() {
            let report = self.validator.validate(tree);
            if let Some(diagnostic) = report.first_error() {
                return Err(CombineError::MalformedTree {
                    index,
                    path: diagnostic.path.clone(),
                    reason: diagnostic.message.clone(),
                });
            }
        }

        let tally = VoteTally::count(&trees);
        let connective = tally.winner();

        tracing::debug!(
            trees = trees.len(),
            and_votes = tally.and,
            or_votes = tally.or,
            connective = %connective,
            "Combining rules"
        );

        let mut iter = trees.into_iter();
        let Some(first) = iter.next() else {
            return Err(CombineError::TooFewTrees(0));
        };
        let combined = DecisionTree::fold_chain(connective, first, iter);

        let depth = combined.depth();
        if depth > self.validator.max_depth() {
            return Err(CombineError::ResultTooDeep {
                depth,
                limit: self.validator.max_depth(),
            });
        }

        Ok(combined)
    }
}

/// Combine trees with the default validator
pub fn combine(trees: Vec<DecisionTree>) -> Result<DecisionTree> {
    Combiner::new().combine(trees)
}
