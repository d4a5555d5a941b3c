//! Short-circuit behaviour
//!
//! A branch that would fail is only reached when the left side does not
//! decide the result, so the two strategies differ on errors but never on
//! verdicts.

use crate::engine::Evaluator;
use crate::error::RuntimeError;
use verdict_core::ast::{DecisionTree, Operator};
use verdict_core::Record;

fn record() -> Record {
    Record::new().with("age", 20)
}

fn missing() -> DecisionTree {
    DecisionTree::comparison("absent", Operator::Eq, 1)
}

#[test]
fn test_and_skips_right_when_left_is_false() {
    let tree = DecisionTree::and(DecisionTree::comparison("age", Operator::Gt, 30), missing());

    assert_eq!(Evaluator::new().evaluate(&tree, &record()), Ok(false));
    assert_eq!(
        Evaluator::new().with_short_circuit(false).evaluate(&tree, &record()),
        Err(RuntimeError::FieldNotFound("absent".to_string()))
    );
}

#[test]
fn test_or_skips_right_when_left_is_true() {
    let tree = DecisionTree::or(DecisionTree::comparison("age", Operator::Lt, 30), missing());

    assert_eq!(Evaluator::new().evaluate(&tree, &record()), Ok(true));
    assert!(Evaluator::new()
        .with_short_circuit(false)
        .evaluate(&tree, &record())
        .is_err());
}

#[test]
fn test_left_error_is_never_skipped() {
    let tree = DecisionTree::or(missing(), DecisionTree::comparison("age", Operator::Lt, 30));
    assert!(Evaluator::new().evaluate(&tree, &record()).is_err());
}
