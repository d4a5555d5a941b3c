//! Tree Validator - structural checks for decision trees
//!
//! Trees built by the parser are always well formed, but trees can also
//! arrive over the wire. This module checks the invariants the combiner and
//! evaluator rely on and reports every problem it finds.

use serde::{Deserialize, Serialize};
use verdict_core::ast::{is_identifier, DecisionTree};

/// Severity level for validation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single diagnostic message from validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,

    /// Error/warning code (e.g., "E001", "W001")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Location in the tree, e.g. `root.left.right`
    pub path: String,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: impl Into<String>, message: impl Into<String>, path: &str) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            code: code.into(),
            message: message.into(),
            path: path.to_string(),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: impl Into<String>, message: impl Into<String>, path: &str) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code: code.into(),
            message: message.into(),
            path: path.to_string(),
        }
    }
}

/// Result of tree validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the tree is valid (no errors)
    pub valid: bool,

    /// List of errors (severity = Error)
    pub errors: Vec<Diagnostic>,

    /// List of warnings (severity = Warning)
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Error => self.errors.push(diagnostic),
            DiagnosticSeverity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// First error, if any
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.errors.first()
    }
}

/// Trailing path segments kept in a diagnostic
const PATH_TAIL: usize = 6;

/// Render `root.left.right`; long paths keep the last `PATH_TAIL` segments
/// and count the ones dropped, e.g. `root.(+94).left.left.left.left.left.right`.
fn render_path(segments: &[&str]) -> String {
    let skipped = segments.len().saturating_sub(PATH_TAIL);
    let mut path = String::from("root");
    if skipped > 0 {
        path.push_str(&format!(".(+{})", skipped));
    }
    for segment in &segments[skipped..] {
        path.push('.');
        path.push_str(segment);
    }
    path
}

/// Validator for decision tree structure
#[derive(Debug, Clone, Copy)]
pub struct TreeValidator {
    max_depth: usize,
}

impl Default for TreeValidator {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeValidator {
    /// Default limit on tree depth
    pub const DEFAULT_MAX_DEPTH: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate a tree and collect every diagnostic
    pub fn validate(&self, tree: &DecisionTree) -> ValidationResult {
        let mut result = ValidationResult::default();
        self.walk(tree, &mut Vec::new(), &mut result);
        result.valid = result.errors.is_empty();
        result
    }

    fn walk(
        &self,
        tree: &DecisionTree,
        segments: &mut Vec<&'static str>,
        result: &mut ValidationResult,
    ) {
        if segments.len() + 1 > self.max_depth {
            result.push(Diagnostic::error(
                "E003",
                format!("Tree is deeper than {} levels", self.max_depth),
                &render_path(segments),
            ));
            return;
        }

        match tree {
            DecisionTree::Comparison(c) => {
                if !is_identifier(&c.field) {
                    result.push(Diagnostic::error(
                        "E001",
                        format!("Field '{}' is not a valid identifier", c.field),
                        &render_path(segments),
                    ));
                }
                if let verdict_core::Literal::Number(n) = c.literal {
                    if !n.is_finite() {
                        result.push(Diagnostic::error(
                            "E002",
                            format!("Literal {} is not a finite number", n),
                            &render_path(segments),
                        ));
                    }
                }
            }
            DecisionTree::Logical(node) => {
                if node.left == node.right {
                    result.push(Diagnostic::warning(
                        "W001",
                        format!("Both operands of {} are identical", node.connective),
                        &render_path(segments),
                    ));
                }
                for (segment, child) in [("left", &node.left), ("right", &node.right)] {
                    segments.push(segment);
                    self.walk(child, segments, result);
                    segments.pop();
                }
            }
        }
    }
}
