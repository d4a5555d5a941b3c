//! Request-side types shared by SDK callers

use serde::{Deserialize, Serialize};
use verdict_core::ast::DecisionTree;

/// A rule given either as an already-built tree or as rule text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSource {
    Tree(DecisionTree),
    Text(String),
}

impl From<DecisionTree> for RuleSource {
    fn from(tree: DecisionTree) -> Self {
        RuleSource::Tree(tree)
    }
}

impl From<&str> for RuleSource {
    fn from(text: &str) -> Self {
        RuleSource::Text(text.to_string())
    }
}

impl From<String> for RuleSource {
    fn from(text: String) -> Self {
        RuleSource::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use verdict_core::ast::Operator;

    #[test]
    fn test_rule_source_accepts_text_and_trees() {
        let sources: Vec<RuleSource> = serde_json::from_value(json!([
            "age > 30",
            {"type": "operand", "field": "age", "operator": ">", "value": 30},
            {"type": "operand", "value": ["salary", "<=", 100]}
        ]))
        .unwrap();

        assert_eq!(sources[0], RuleSource::Text("age > 30".to_string()));
        assert_eq!(
            sources[1],
            RuleSource::Tree(DecisionTree::comparison("age", Operator::Gt, 30))
        );
        assert_eq!(
            sources[2],
            RuleSource::Tree(DecisionTree::comparison("salary", Operator::Le, 100))
        );
    }

    #[test]
    fn test_rule_source_rejects_other_shapes() {
        assert!(serde_json::from_value::<RuleSource>(json!(42)).is_err());
        assert!(serde_json::from_value::<RuleSource>(json!({"type": "operand"})).is_err());
    }
}
