//! SDK error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parse error: {0}")]
    ParseError(#[from] verdict_parser::ParseError),

    /// Combiner error
    #[error("Combine error: {0}")]
    CombineError(#[from] verdict_compiler::CombineError),

    /// Runtime error
    #[error("Evaluation error: {0}")]
    RuntimeError(#[from] verdict_runtime::RuntimeError),

    /// Tree submitted for evaluation failed structural validation
    #[error("Evaluation error: malformed rule at {path}: {reason}")]
    MalformedTree { path: String, reason: String },
}

impl SdkError {
    /// Category reported to callers
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::ConfigError(_) => ErrorKind::Config,
            SdkError::ParseError(_) => ErrorKind::Parse,
            SdkError::CombineError(_) => ErrorKind::Combine,
            SdkError::RuntimeError(_) | SdkError::MalformedTree { .. } => ErrorKind::Evaluation,
        }
    }
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "ParseError")]
    Parse,
    #[serde(rename = "CombineError")]
    Combine,
    #[serde(rename = "EvaluationError")]
    Evaluation,
    #[serde(rename = "ConfigError")]
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "ParseError",
            ErrorKind::Combine => "CombineError",
            ErrorKind::Evaluation => "EvaluationError",
            ErrorKind::Config => "ConfigError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_compiler::CombineError;
    use verdict_parser::ParseError;
    use verdict_runtime::RuntimeError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("max_depth must be at least 1".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("max_depth"));
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: SdkError = ParseError::Empty.into();
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert!(error.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_combine_error_conversion() {
        let error: SdkError = CombineError::TooFewTrees(1).into();
        assert_eq!(error.kind(), ErrorKind::Combine);
    }

    #[test]
    fn test_runtime_error_conversion() {
        let error: SdkError = RuntimeError::FieldNotFound("age".to_string()).into();
        assert_eq!(error.kind(), ErrorKind::Evaluation);
        assert_eq!(error.to_string(), "Evaluation error: Field not found: age");
    }

    #[test]
    fn test_malformed_tree_is_evaluation_kind() {
        let error = SdkError::MalformedTree {
            path: "root.left".to_string(),
            reason: "Field '' is not a valid identifier".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::Evaluation);
        assert!(error.to_string().contains("root.left"));
    }

    #[test]
    fn test_error_kind_names() {
        let kinds = [
            (ErrorKind::Parse, "ParseError"),
            (ErrorKind::Combine, "CombineError"),
            (ErrorKind::Evaluation, "EvaluationError"),
            (ErrorKind::Config, "ConfigError"),
        ];
        for (kind, name) in kinds {
            assert_eq!(kind.to_string(), name);
            assert_eq!(serde_json::to_value(kind).unwrap(), name);
        }
    }
}
