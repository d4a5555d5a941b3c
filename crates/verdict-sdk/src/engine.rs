//! Rule engine
//!
//! Ties the parser, combiner and evaluator together under one
//! configuration. Every operation is a synchronous, self-contained call;
//! the engine holds only its configuration and can be shared freely.

use crate::builder::RuleEngineBuilder;
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::types::RuleSource;
use verdict_compiler::{CombineError, Combiner, TreeValidator};
use verdict_core::ast::DecisionTree;
use verdict_core::Record;
use verdict_parser::RuleParser;
use verdict_runtime::Evaluator;

/// Parses, combines and evaluates rules
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: EngineConfig,
    parser: RuleParser,
    validator: TreeValidator,
    combiner: Combiner,
    evaluator: Evaluator,
}

impl RuleEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    pub(crate) fn from_config(config: EngineConfig) -> Self {
        let parser = RuleParser::new()
            .with_max_depth(config.max_depth)
            .with_max_length(config.max_rule_length)
            .with_max_tree_depth(config.max_rule_depth);
        let validator = TreeValidator::new().with_max_depth(config.max_tree_depth);
        let combiner = Combiner::new().with_validator(validator);
        let evaluator = Evaluator::new().with_short_circuit(config.short_circuit);

        Self {
            config,
            parser,
            validator,
            combiner,
            evaluator,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse rule text into a decision tree
    pub fn create_rule(&self, text: &str) -> Result<DecisionTree> {
        match self.parser.parse(text) {
            Ok(tree) => {
                tracing::debug!(
                    length = text.len(),
                    depth = tree.depth(),
                    comparisons = tree.comparisons().len(),
                    "Rule created"
                );
                Ok(tree)
            }
            Err(e) => {
                tracing::debug!(length = text.len(), error = %e, "Rule rejected");
                Err(e.into())
            }
        }
    }

    /// Combine two or more trees into one
    pub fn combine_rules(&self, trees: Vec<DecisionTree>) -> Result<DecisionTree> {
        let count = trees.len();
        let combined = self.combiner.combine(trees).map_err(|e| {
            tracing::debug!(trees = count, error = %e, "Combine rejected");
            SdkError::from(e)
        })?;

        tracing::debug!(
            trees = count,
            connective = ?combined.root_connective(),
            "Rules combined"
        );
        Ok(combined)
    }

    /// Parse each rule text, then combine the resulting trees
    pub fn combine_rule_texts<S: AsRef<str>>(&self, texts: &[S]) -> Result<DecisionTree> {
        self.combine_sources(
            texts
                .iter()
                .map(|text| RuleSource::from(text.as_ref()))
                .collect(),
        )
    }

    /// Combine a mix of rule texts and trees; texts are parsed first
    pub fn combine_sources(&self, sources: Vec<RuleSource>) -> Result<DecisionTree> {
        if sources.len() < 2 {
            return Err(CombineError::TooFewTrees(sources.len()).into());
        }

        let trees = sources
            .into_iter()
            .map(|source| match source {
                RuleSource::Tree(tree) => Ok(tree),
                RuleSource::Text(text) => self.create_rule(&text),
            })
            .collect::<Result<Vec<_>>>()?;

        self.combine_rules(trees)
    }

    /// Evaluate a tree against a record
    pub fn evaluate_rule(&self, tree: &DecisionTree, record: &Record) -> Result<bool> {
        if self.config.validate_inputs {
            let report = self.validator.validate(tree);
            if let Some(diagnostic) = report.first_error() {
                tracing::debug!(
                    code = %diagnostic.code,
                    path = %diagnostic.path,
                    "Evaluation rejected malformed tree"
                );
                return Err(SdkError::MalformedTree {
                    path: diagnostic.path.clone(),
                    reason: diagnostic.message.clone(),
                });
            }
        }

        let result = self.evaluator.evaluate(tree, record).map_err(|e| {
            tracing::debug!(fields = record.len(), error = %e, "Evaluation failed");
            SdkError::from(e)
        })?;

        tracing::debug!(fields = record.len(), result, "Rule evaluated");
        Ok(result)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
