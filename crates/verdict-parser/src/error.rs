//! Parser error types

use thiserror::Error;

/// Parser error
///
/// Every variant that points into the rule text carries the offending
/// `fragment` and its byte `position` (0-based).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Empty or whitespace-only rule
    #[error("Empty rule")]
    Empty,

    /// Rule text over the configured length limit
    #[error("Rule is {length} bytes long, the limit is {limit}")]
    RuleTooLong { length: usize, limit: usize },

    /// Character that starts no token
    #[error("Invalid character '{fragment}' at position {position}")]
    InvalidCharacter { fragment: String, position: usize },

    /// Opening quote with no closing quote
    #[error("Unterminated string literal {fragment} at position {position}")]
    UnterminatedString { fragment: String, position: usize },

    /// Run of comparator characters that is not a known comparator
    #[error("Unknown comparator '{fragment}' at position {position}")]
    UnknownComparator { fragment: String, position: usize },

    /// Field not followed by a comparator
    #[error("Expected comparator after field '{field}', found '{fragment}' at position {position}")]
    ExpectedComparator {
        field: String,
        fragment: String,
        position: usize,
    },

    /// Comparator operand that is not a well-formed field or literal
    #[error("Invalid operand '{fragment}' at position {position}: expected {expected}")]
    InvalidOperand {
        fragment: String,
        position: usize,
        expected: &'static str,
    },

    /// Parenthesis without a partner
    #[error("Unbalanced parenthesis '{fragment}' at position {position}")]
    UnbalancedParenthesis { fragment: String, position: usize },

    /// AND/OR with no term after it
    #[error("Dangling connective '{fragment}' at position {position}: no term follows")]
    DanglingConnective { fragment: String, position: usize },

    /// Token that cannot appear where it does
    #[error("Unexpected token '{fragment}' at position {position}")]
    UnexpectedToken { fragment: String, position: usize },

    /// Input ended in the middle of a comparison or group
    #[error("Unexpected end of rule at position {position}: expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    /// Parentheses nested past the configured limit
    #[error("Parentheses nested deeper than {limit} at position {position}")]
    NestingTooDeep {
        fragment: String,
        position: usize,
        limit: usize,
    },

    /// Resulting tree deeper than the configured limit
    #[error("Rule tree grows deeper than {limit} levels at '{fragment}' (position {position})")]
    TreeTooDeep {
        fragment: String,
        position: usize,
        limit: usize,
    },
}

impl ParseError {
    /// The offending substring, empty when the problem is an absence
    pub fn fragment(&self) -> &str {
        match self {
            ParseError::Empty | ParseError::RuleTooLong { .. } | ParseError::UnexpectedEnd { .. } => "",
            ParseError::InvalidCharacter { fragment, .. }
            | ParseError::UnterminatedString { fragment, .. }
            | ParseError::UnknownComparator { fragment, .. }
            | ParseError::ExpectedComparator { fragment, .. }
            | ParseError::InvalidOperand { fragment, .. }
            | ParseError::UnbalancedParenthesis { fragment, .. }
            | ParseError::DanglingConnective { fragment, .. }
            | ParseError::UnexpectedToken { fragment, .. }
            | ParseError::NestingTooDeep { fragment, .. }
            | ParseError::TreeTooDeep { fragment, .. } => fragment,
        }
    }

    /// Byte offset of the problem in the rule text
    pub fn position(&self) -> usize {
        match self {
            ParseError::Empty => 0,
            ParseError::RuleTooLong { limit, .. } => *limit,
            ParseError::InvalidCharacter { position, .. }
            | ParseError::UnterminatedString { position, .. }
            | ParseError::UnknownComparator { position, .. }
            | ParseError::ExpectedComparator { position, .. }
            | ParseError::InvalidOperand { position, .. }
            | ParseError::UnbalancedParenthesis { position, .. }
            | ParseError::DanglingConnective { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::NestingTooDeep { position, .. }
            | ParseError::TreeTooDeep { position, .. } => *position,
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_fragment_and_position() {
        let err = ParseError::UnknownComparator {
            fragment: "=>".to_string(),
            position: 4,
        };
        assert_eq!(err.to_string(), "Unknown comparator '=>' at position 4");
        assert_eq!(err.fragment(), "=>");
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_absence_errors_have_empty_fragment() {
        let err = ParseError::UnexpectedEnd {
            position: 9,
            expected: "a literal",
        };
        assert_eq!(err.fragment(), "");
        assert_eq!(err.position(), 9);
        assert_eq!(ParseError::Empty.position(), 0);
    }
}
