//! REST API type definitions
//!
//! Request and response types for the REST API endpoints. Trees travel in
//! the decision tree wire format, records as flat JSON objects.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use verdict_core::ast::DecisionTree;
use verdict_core::Record;
use verdict_sdk::{CombineError, RuleEngine, RuleSource};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleEngine>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `POST /create_rule` payload
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    /// Rule text
    pub rule: String,
}

/// `POST /combine_rules` payload
///
/// Elements stay raw JSON until the count has been checked, so a lone
/// unreadable rule is still reported as too few rules.
#[derive(Debug, Deserialize)]
pub struct CombineRulesRequest {
    /// Trees or rule texts, combined in order
    pub rules: Vec<serde_json::Value>,
}

impl CombineRulesRequest {
    /// Read each element as rule text (a JSON string) or a tree
    pub fn into_sources(self) -> Result<Vec<RuleSource>, CombineError> {
        if self.rules.len() < 2 {
            return Err(CombineError::TooFewTrees(self.rules.len()));
        }

        self.rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| match rule {
                serde_json::Value::String(text) => Ok(RuleSource::Text(text)),
                tree => serde_json::from_value::<DecisionTree>(tree)
                    .map(RuleSource::Tree)
                    .map_err(|e| CombineError::MalformedTree {
                        index,
                        path: "root".to_string(),
                        reason: e.to_string(),
                    }),
            })
            .collect()
    }
}

/// `POST /evaluate_rule` payload
#[derive(Debug, Deserialize)]
pub struct EvaluateRuleRequest {
    /// Tree to evaluate
    pub ast: DecisionTree,

    /// Record the tree is evaluated against
    pub data: Record,
}

/// Response carrying a tree
#[derive(Debug, Serialize, Deserialize)]
pub struct AstResponse {
    pub ast: DecisionTree,
}

/// Response carrying a verdict
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRuleResponse {
    pub result: bool,
}
