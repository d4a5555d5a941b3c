//! Builder pattern for RuleEngine

use crate::config::EngineConfig;
use crate::engine::RuleEngine;
use crate::error::{Result, SdkError};
use verdict_core::ast::DecisionTree;

/// Builder for RuleEngine
///
/// # Example
///
/// ```rust
/// use verdict_sdk::RuleEngineBuilder;
///
/// let engine = RuleEngineBuilder::new()
///     .max_depth(16)
///     .short_circuit(true)
///     .build()
///     .unwrap();
///
/// let tree = engine.create_rule("age > 30").unwrap();
/// assert!(tree.is_comparison());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngineBuilder {
    config: EngineConfig,
}

impl RuleEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set maximum parenthesis nesting
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set maximum rule length in bytes
    pub fn max_rule_length(mut self, max_rule_length: usize) -> Self {
        self.config.max_rule_length = max_rule_length;
        self
    }

    /// Set maximum depth of a parsed rule
    pub fn max_rule_depth(mut self, max_rule_depth: usize) -> Self {
        self.config.max_rule_depth = max_rule_depth;
        self
    }

    /// Set maximum depth of submitted trees
    pub fn max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.config.max_tree_depth = max_tree_depth;
        self
    }

    /// Enable short-circuit evaluation
    pub fn short_circuit(mut self, enable: bool) -> Self {
        self.config.short_circuit = enable;
        self
    }

    /// Enable validation of trees before evaluation
    pub fn validate_inputs(mut self, enable: bool) -> Self {
        self.config.validate_inputs = enable;
        self
    }

    /// Build the engine
    ///
    /// Depth limits must nest: every parsed rule has to be accepted for
    /// combination and evaluation, and every accepted tree has to fit the
    /// JSON wire format.
    pub fn build(self) -> Result<RuleEngine> {
        let config = &self.config;
        let limits = [
            ("max_depth", config.max_depth),
            ("max_rule_length", config.max_rule_length),
            ("max_rule_depth", config.max_rule_depth),
            ("max_tree_depth", config.max_tree_depth),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(SdkError::ConfigError(format!("{} must be at least 1", name)));
        }

        if config.max_rule_depth > config.max_tree_depth {
            return Err(SdkError::ConfigError(format!(
                "max_rule_depth ({}) must not exceed max_tree_depth ({})",
                config.max_rule_depth, config.max_tree_depth
            )));
        }
        if config.max_tree_depth > DecisionTree::MAX_WIRE_DEPTH {
            return Err(SdkError::ConfigError(format!(
                "max_tree_depth ({}) must not exceed {}",
                config.max_tree_depth,
                DecisionTree::MAX_WIRE_DEPTH
            )));
        }

        tracing::debug!(config = ?self.config, "Building rule engine");

        Ok(RuleEngine::from_config(self.config))
    }
}
