//! Basic evaluation tests

use crate::engine::{evaluate, Evaluator};
use crate::error::RuntimeError;
use verdict_core::ast::{DecisionTree, Operator};
use verdict_core::Record;

fn employee() -> Record {
    Record::new()
        .with("age", 35)
        .with("department", "Sales")
        .with("salary", 60000)
        .with("experience", 3)
}

#[test]
fn test_evaluate_single_comparison() {
    let tree = DecisionTree::comparison("age", Operator::Gt, 30);
    assert!(evaluate(&tree, &employee()).unwrap());

    let tree = DecisionTree::comparison("age", Operator::Lt, 30);
    assert!(!evaluate(&tree, &employee()).unwrap());
}

#[test]
fn test_evaluate_and_or() {
    let tree = DecisionTree::and(
        DecisionTree::comparison("age", Operator::Gt, 30),
        DecisionTree::comparison("department", Operator::EqEq, "Sales"),
    );
    assert!(evaluate(&tree, &employee()).unwrap());

    let tree = DecisionTree::or(
        DecisionTree::comparison("age", Operator::Lt, 25),
        DecisionTree::comparison("experience", Operator::Gt, 5),
    );
    assert!(!evaluate(&tree, &employee()).unwrap());
}

#[test]
fn test_missing_field_is_an_error() {
    let tree = DecisionTree::comparison("bonus", Operator::Gt, 0);
    assert_eq!(
        evaluate(&tree, &employee()),
        Err(RuntimeError::FieldNotFound("bonus".to_string()))
    );
}

#[test]
fn test_relational_on_text_is_an_error() {
    let tree = DecisionTree::comparison("department", Operator::Ge, "M");
    assert!(matches!(
        evaluate(&tree, &employee()),
        Err(RuntimeError::TypeError { operator: Operator::Ge, .. })
    ));
}

#[test]
fn test_evaluator_defaults_to_short_circuit() {
    assert!(Evaluator::new().short_circuit());
    assert!(!Evaluator::new().with_short_circuit(false).short_circuit());
}
