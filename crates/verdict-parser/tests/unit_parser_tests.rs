//! Unit tests for the rule parser
//!
//! Covers the grammar end to end: precedence, grouping, literals and every
//! category of parse failure.

use proptest::prelude::*;
use verdict_core::ast::{Connective, DecisionTree, Operator};
use verdict_core::Literal;
use verdict_parser::{parse, ParseError, RuleParser};

// =============================================================================
// Successful Parses
// =============================================================================

#[test]
fn test_reference_scenario_rule() {
    let text = r#"((age > 30 AND department == "Sales") OR (age < 25 AND department == "Marketing")) AND (salary > 50000 OR experience > 5)"#;
    let tree = parse(text).unwrap();

    let expected = DecisionTree::and(
        DecisionTree::or(
            DecisionTree::and(
                DecisionTree::comparison("age", Operator::Gt, 30),
                DecisionTree::comparison("department", Operator::EqEq, "Sales"),
            ),
            DecisionTree::and(
                DecisionTree::comparison("age", Operator::Lt, 25),
                DecisionTree::comparison("department", Operator::EqEq, "Marketing"),
            ),
        ),
        DecisionTree::or(
            DecisionTree::comparison("salary", Operator::Gt, 50000),
            DecisionTree::comparison("experience", Operator::Gt, 5),
        ),
    );

    assert_eq!(tree, expected);
    assert_eq!(tree.root_connective(), Some(Connective::And));
}

#[test]
fn test_second_fixture_rule() {
    let text = r#"((age > 30 AND department == "Marketing")) AND (salary > 20000 OR experience > 5)"#;
    let tree = parse(text).unwrap();

    assert_eq!(tree.root_connective(), Some(Connective::And));
    assert_eq!(tree.comparisons().len(), 4);
}

#[test]
fn test_or_chain_folds_left() {
    let tree = parse("a = 1 OR b = 2 OR c = 3 OR d = 4").unwrap();
    match &tree {
        DecisionTree::Logical(node) => {
            assert_eq!(node.connective, Connective::Or);
            assert_eq!(*node.right, DecisionTree::comparison("d", Operator::Eq, 4));
            assert_eq!(node.left.depth(), 3);
        }
        _ => panic!("Expected logical node"),
    }
}

#[test]
fn test_numeric_literal_forms() {
    let cases = [
        ("x > -5", -5.0),
        ("x > 3.25", 3.25),
        ("x > 1e3", 1000.0),
        ("x > 2.5E-1", 0.25),
    ];
    for (text, expected) in cases {
        match parse(text).unwrap() {
            DecisionTree::Comparison(c) => assert_eq!(c.literal, Literal::Number(expected)),
            _ => panic!("Expected comparison for {}", text),
        }
    }
}

#[test]
fn test_quoted_number_stays_a_string_literal() {
    match parse(r#"zip == "01234""#).unwrap() {
        DecisionTree::Comparison(c) => assert_eq!(c.literal, Literal::from("01234")),
        _ => panic!("Expected comparison"),
    }
}

#[test]
fn test_parsed_tree_serializes_to_wire_format() {
    let tree = parse(r#"age > 30 AND department = "Sales""#).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["type"], "operator");
    assert_eq!(json["value"], "AND");
    assert_eq!(json["left"]["type"], "operand");
    assert_eq!(json["left"]["field"], "age");
    assert_eq!(json["left"]["operator"], ">");
    assert_eq!(json["left"]["value"], 30);
    assert_eq!(json["right"]["operator"], "=");
    assert_eq!(json["right"]["value"], "Sales");
}

// =============================================================================
// Failures
// =============================================================================

fn category(err: &ParseError) -> &'static str {
    match err {
        ParseError::Empty => "empty",
        ParseError::RuleTooLong { .. } => "too_long",
        ParseError::InvalidCharacter { .. } => "invalid_character",
        ParseError::UnterminatedString { .. } => "unterminated_string",
        ParseError::UnknownComparator { .. } => "unknown_comparator",
        ParseError::ExpectedComparator { .. } => "expected_comparator",
        ParseError::InvalidOperand { .. } => "invalid_operand",
        ParseError::UnbalancedParenthesis { .. } => "unbalanced",
        ParseError::DanglingConnective { .. } => "dangling",
        ParseError::UnexpectedToken { .. } => "unexpected_token",
        ParseError::UnexpectedEnd { .. } => "unexpected_end",
        ParseError::NestingTooDeep { .. } => "too_deep",
        ParseError::TreeTooDeep { .. } => "tree_too_deep",
    }
}

#[test]
fn test_every_failure_category() {
    let cases = [
        ("", "empty"),
        ("   ", "empty"),
        ("(age > 30", "unbalanced"),
        ("age > 30))", "unbalanced"),
        ("(", "unbalanced"),
        (")", "unbalanced"),
        ("age > 3 AND (", "unbalanced"),
        ("age <> 30", "unknown_comparator"),
        ("age === 30", "unknown_comparator"),
        ("age > 30 OR", "dangling"),
        ("age > 30 AND AND b > 1", "dangling"),
        ("age > old", "invalid_operand"),
        ("\"age\" > 3", "invalid_operand"),
        ("age 3", "expected_comparator"),
        ("age > 3 salary > 2", "unexpected_token"),
        ("AND age > 3", "unexpected_token"),
        ("age > 3 and b > 2", "unexpected_token"),
        ("age >", "unexpected_end"),
        ("age > 'x", "unterminated_string"),
        ("age > 3 # note", "invalid_character"),
    ];

    for (text, expected) in cases {
        let err = parse(text).expect_err(text);
        assert_eq!(category(&err), expected, "unexpected error for {:?}: {:?}", text, err);
    }
}

#[test]
fn test_error_position_points_at_fragment() {
    let text = "age > 30 AND salary ~ 5";
    let err = parse(text).unwrap_err();
    assert_eq!(err.fragment(), "~");
    assert_eq!(&text[err.position()..err.position() + 1], "~");
}

#[test]
fn test_parser_limits_are_configurable() {
    let parser = RuleParser::new().with_max_depth(1).with_max_length(64);
    assert!(parser.parse("(a > 1) AND (b > 2)").is_ok());
    assert!(matches!(
        parser.parse("((a > 1))"),
        Err(ParseError::NestingTooDeep { .. })
    ));
    assert!(matches!(
        parser.parse(&"a > 1 AND ".repeat(10)),
        Err(ParseError::RuleTooLong { .. })
    ));
}

fn chain(comparisons: usize) -> String {
    vec!["a > 1"; comparisons].join(" AND ")
}

#[test]
fn test_flat_chain_is_bounded_by_tree_depth() {
    let limit = RuleParser::DEFAULT_MAX_TREE_DEPTH;

    let tree = parse(&chain(limit)).unwrap();
    assert_eq!(tree.depth(), limit);

    let err = parse(&chain(limit + 1)).unwrap_err();
    assert_eq!(category(&err), "tree_too_deep");
    assert_eq!(err.fragment(), "AND");
}

#[test]
fn test_chain_under_length_limit_can_still_be_too_deep() {
    // 300 comparisons fit in 4096 bytes but not in the tree depth limit
    let text = chain(300);
    assert!(text.len() < RuleParser::DEFAULT_MAX_LENGTH);
    assert!(matches!(parse(&text), Err(ParseError::TreeTooDeep { limit: 64, .. })));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arb_comparison() -> impl Strategy<Value = DecisionTree> {
    (
        "[a-z_][a-z0-9_]{0,8}",
        arb_operator(),
        prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(Literal::from),
            "[A-Za-z0-9 '\"]{0,12}".prop_map(Literal::String),
        ],
    )
        .prop_map(|(field, op, literal)| DecisionTree::comparison(field, op, literal))
}

fn arb_tree() -> impl Strategy<Value = DecisionTree> {
    arb_comparison().prop_recursive(4, 16, 2, |inner| {
        (
            prop_oneof![Just(Connective::And), Just(Connective::Or)],
            inner.clone(),
            inner,
        )
            .prop_map(|(c, l, r)| DecisionTree::logical(c, l, r))
    })
}

proptest! {
    #[test]
    fn prop_display_then_parse_is_identity(tree in arb_tree()) {
        let reparsed = parse(&tree.to_string()).unwrap();
        prop_assert_eq!(reparsed, tree);
    }
}
