//! Decision tree AST nodes
//!
//! A decision tree is a binary tree with exactly two node kinds: comparison
//! leaves and logical nodes joining two subtrees. The serde representation is
//! the wire format exchanged with callers:
//!
//! ```json
//! { "type": "operand", "field": "age", "operator": ">", "value": 30 }
//! { "type": "operator", "value": "AND", "left": { ... }, "right": { ... } }
//! ```

use super::operator::{Connective, Operator};
use crate::types::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DecisionTree {
    /// Leaf: `record[field] <operator> literal`
    #[serde(rename = "operand")]
    Comparison(Comparison),

    /// Internal node: `left <connective> right`
    #[serde(rename = "operator")]
    Logical(LogicalNode),
}

/// Comparison leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ComparisonRepr")]
pub struct Comparison {
    pub field: String,
    pub operator: Operator,
    #[serde(rename = "value")]
    pub literal: Literal,
}

/// Logical node with both children always present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalNode {
    #[serde(rename = "value")]
    pub connective: Connective,
    pub left: Box<DecisionTree>,
    pub right: Box<DecisionTree>,
}

/// Accepted operand shapes: the canonical one, and the compact
/// `{"value": [field, operator, literal]}` form older clients send.
#[derive(Deserialize)]
#[serde(untagged)]
enum ComparisonRepr {
    Canonical {
        field: String,
        operator: Operator,
        value: Literal,
    },
    Compact {
        value: (String, Operator, Literal),
    },
}

impl From<ComparisonRepr> for Comparison {
    fn from(repr: ComparisonRepr) -> Self {
        match repr {
            ComparisonRepr::Canonical {
                field,
                operator,
                value,
            }
            | ComparisonRepr::Compact {
                value: (field, operator, value),
            } => Comparison {
                field,
                operator,
                literal: value,
            },
        }
    }
}

impl Comparison {
    pub fn new(field: impl Into<String>, operator: Operator, literal: impl Into<Literal>) -> Self {
        Self {
            field: field.into(),
            operator,
            literal: literal.into(),
        }
    }
}

impl DecisionTree {
    /// Deepest tree that still deserializes from JSON when nested inside a
    /// request envelope such as `{"rules": [tree]}`. serde_json stops at 128
    /// levels of nesting; the envelope and a compact operand take the rest.
    pub const MAX_WIRE_DEPTH: usize = 120;

    /// Create a comparison leaf
    pub fn comparison(
        field: impl Into<String>,
        operator: Operator,
        literal: impl Into<Literal>,
    ) -> Self {
        DecisionTree::Comparison(Comparison::new(field, operator, literal))
    }

    /// Create a logical node
    pub fn logical(connective: Connective, left: DecisionTree, right: DecisionTree) -> Self {
        DecisionTree::Logical(LogicalNode {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create an AND node
    pub fn and(left: DecisionTree, right: DecisionTree) -> Self {
        Self::logical(Connective::And, left, right)
    }

    /// Create an OR node
    pub fn or(left: DecisionTree, right: DecisionTree) -> Self {
        Self::logical(Connective::Or, left, right)
    }

    /// Fold a chain of trees left to right under one connective.
    ///
    /// `[a, b, c]` becomes `((a <c> b) <c> c)`; no rebalancing is done.
    pub fn fold_chain<I>(connective: Connective, first: DecisionTree, rest: I) -> DecisionTree
    where
        I: IntoIterator<Item = DecisionTree>,
    {
        rest.into_iter()
            .fold(first, |acc, next| DecisionTree::logical(connective, acc, next))
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, DecisionTree::Comparison(_))
    }

    /// Connective at the root, `None` for a single comparison
    pub fn root_connective(&self) -> Option<Connective> {
        match self {
            DecisionTree::Comparison(_) => None,
            DecisionTree::Logical(node) => Some(node.connective),
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Comparison(_) => 1,
            DecisionTree::Logical(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    /// All comparison leaves, left to right
    pub fn comparisons(&self) -> Vec<&Comparison> {
        let mut result = Vec::new();
        self.collect_comparisons(&mut result);
        result
    }

    fn collect_comparisons<'a>(&'a self, result: &mut Vec<&'a Comparison>) {
        match self {
            DecisionTree::Comparison(c) => result.push(c),
            DecisionTree::Logical(node) => {
                node.left.collect_comparisons(result);
                node.right.collect_comparisons(result);
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.literal)
    }
}

/// Renders rule text; logical nodes are fully parenthesised so the output
/// parses back to the same tree.
impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionTree::Comparison(c) => write!(f, "{}", c),
            DecisionTree::Logical(node) => {
                write!(f, "({} {} {})", node.left, node.connective, node.right)
            }
        }
    }
}

/// Returns true if `name` is a valid field identifier:
/// a letter or underscore followed by letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
