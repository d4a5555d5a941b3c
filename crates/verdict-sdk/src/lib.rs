//! Verdict Rule Engine SDK
//!
//! High-level API for turning rule text into decision trees, merging them
//! and evaluating them against records.
//!
//! ```rust
//! use verdict_sdk::{Record, RuleEngine};
//!
//! let engine = RuleEngine::new();
//! let rule = engine.create_rule(r#"age > 30 AND department == "Sales""#).unwrap();
//! let record = Record::new().with("age", 35).with("department", "Sales");
//! assert!(engine.evaluate_rule(&rule, &record).unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use config::EngineConfig;
pub use engine::RuleEngine;
pub use error::{ErrorKind, Result, SdkError};
pub use types::RuleSource;

// Re-export commonly used types from dependencies
pub use verdict_core::ast::{Connective, DecisionTree, Operator};
pub use verdict_compiler::CombineError;
pub use verdict_core::{Literal, Record, Value};
