//! Configuration types for RuleEngine

use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum parenthesis nesting accepted by the parser
    pub max_depth: usize,

    /// Maximum rule text length in bytes
    pub max_rule_length: usize,

    /// Maximum depth of a tree the parser may build from one rule
    pub max_rule_depth: usize,

    /// Maximum depth of a tree submitted for combination or evaluation,
    /// and of a combined tree
    pub max_tree_depth: usize,

    /// Skip the right branch of a logical node when the left decides it
    pub short_circuit: bool,

    /// Validate trees submitted for evaluation, not only for combination
    pub validate_inputs: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            max_depth: 64,
            max_rule_length: 4096,
            max_rule_depth: 64,
            max_tree_depth: 100,
            short_circuit: true,
            validate_inputs: true,
        }
    }

    /// Set maximum parenthesis nesting
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set maximum rule length
    pub fn with_max_rule_length(mut self, max_rule_length: usize) -> Self {
        self.max_rule_length = max_rule_length;
        self
    }

    /// Set maximum depth of a parsed rule
    pub fn with_max_rule_depth(mut self, max_rule_depth: usize) -> Self {
        self.max_rule_depth = max_rule_depth;
        self
    }

    /// Set maximum tree depth
    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    /// Enable short-circuit evaluation
    pub fn short_circuit(mut self, enable: bool) -> Self {
        self.short_circuit = enable;
        self
    }

    /// Enable validation of trees before evaluation
    pub fn validate_inputs(mut self, enable: bool) -> Self {
        self.validate_inputs = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
