//! Rule parser
//!
//! Parses rule text into a `DecisionTree`.
//!
//! Grammar (`AND` binds tighter than `OR`, parentheses override):
//! ```text
//! expr       := orExpr
//! orExpr     := andExpr ( "OR" andExpr )*
//! andExpr    := term ( "AND" term )*
//! term       := "(" orExpr ")" | comparison
//! comparison := field comparator literal
//! comparator := ">" | "<" | ">=" | "<=" | "==" | "=" | "!="
//! literal    := quoted string | number
//! ```
//!
//! Chains fold left: `a AND b AND c` becomes `(a AND b) AND c`.

use crate::error::{ParseError, Result};
use crate::lexer::{tokenize, Spanned, Token};
use std::ops::Range;
use verdict_core::ast::{Connective, DecisionTree, Operator};
use verdict_core::Literal;

/// Rule parser with its input limits
#[derive(Debug, Clone, Copy)]
pub struct RuleParser {
    max_depth: usize,
    max_length: usize,
    max_tree_depth: usize,
}

impl Default for RuleParser {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            max_tree_depth: Self::DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

impl RuleParser {
    /// Default limit on parenthesis nesting
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    /// Default limit on rule text length in bytes
    pub const DEFAULT_MAX_LENGTH: usize = 4096;
    /// Default limit on the depth of the resulting tree
    pub const DEFAULT_MAX_TREE_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum parenthesis nesting
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum rule length in bytes
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the maximum depth of the tree a rule may produce
    ///
    /// A flat `AND`/`OR` chain adds one level per comparison, so this bounds
    /// chain length as well as grouping.
    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    /// Parse rule text into a decision tree
    pub fn parse(&self, text: &str) -> Result<DecisionTree> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        if text.len() > self.max_length {
            return Err(ParseError::RuleTooLong {
                length: text.len(),
                limit: self.max_length,
            });
        }

        let tokens = tokenize(text)?;
        let mut cursor = Cursor {
            source: text,
            tokens,
            pos: 0,
            depth: 0,
            max_depth: self.max_depth,
            max_tree_depth: self.max_tree_depth,
        };

        let tree = cursor.parse_or()?;

        if let Some(spanned) = cursor.peek() {
            let fragment = cursor.slice(&spanned.span);
            let position = spanned.span.start;
            return Err(match spanned.token {
                Token::RParen => ParseError::UnbalancedParenthesis { fragment, position },
                _ => ParseError::UnexpectedToken { fragment, position },
            });
        }

        log::debug!(
            "Parsed rule ({} bytes) into tree of depth {}",
            text.len(),
            tree.depth()
        );

        Ok(tree)
    }
}

/// Parse rule text with the default limits
pub fn parse(text: &str) -> Result<DecisionTree> {
    RuleParser::new().parse(text)
}

/// Position in the token stream for one parse call
struct Cursor<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
    max_depth: usize,
    max_tree_depth: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn slice(&self, span: &Range<usize>) -> String {
        self.source[span.clone()].to_string()
    }

    fn end(&self) -> usize {
        self.source.len()
    }

    fn parse_or(&mut self) -> Result<DecisionTree> {
        self.parse_chain(Connective::Or)
    }

    fn parse_and(&mut self) -> Result<DecisionTree> {
        self.parse_chain(Connective::And)
    }

    /// Parse `operand (<connective> operand)*`, where an operand is one level
    /// down in precedence, and fold the chain left to right.
    fn parse_chain(&mut self, connective: Connective) -> Result<DecisionTree> {
        let first = self.parse_operand(connective)?;
        let mut depth = first.depth();
        let mut rest = Vec::new();

        while let Some(span) = self.eat_connective(connective) {
            if matches!(
                self.peek().map(|s| &s.token),
                None | Some(Token::RParen) | Some(Token::And) | Some(Token::Or)
            ) {
                return Err(ParseError::DanglingConnective {
                    fragment: self.slice(&span),
                    position: span.start,
                });
            }

            let next = self.parse_operand(connective)?;
            depth = depth.max(next.depth()) + 1;
            if depth > self.max_tree_depth {
                return Err(ParseError::TreeTooDeep {
                    fragment: self.slice(&span),
                    position: span.start,
                    limit: self.max_tree_depth,
                });
            }
            rest.push(next);
        }

        Ok(DecisionTree::fold_chain(connective, first, rest))
    }

    fn parse_operand(&mut self, connective: Connective) -> Result<DecisionTree> {
        match connective {
            Connective::Or => self.parse_and(),
            Connective::And => self.parse_term(),
        }
    }

    fn eat_connective(&mut self, connective: Connective) -> Option<Range<usize>> {
        let found = matches!(
            (self.peek().map(|s| &s.token), connective),
            (Some(Token::And), Connective::And) | (Some(Token::Or), Connective::Or)
        );
        if found {
            self.advance().map(|s| s.span)
        } else {
            None
        }
    }

    fn parse_term(&mut self) -> Result<DecisionTree> {
        let Some(spanned) = self.peek().cloned() else {
            return Err(ParseError::UnexpectedEnd {
                position: self.end(),
                expected: "a comparison",
            });
        };

        match spanned.token {
            Token::LParen => self.parse_group(spanned.span),
            Token::RParen if self.depth == 0 => Err(ParseError::UnbalancedParenthesis {
                fragment: self.slice(&spanned.span),
                position: spanned.span.start,
            }),
            Token::RParen | Token::And | Token::Or => Err(ParseError::UnexpectedToken {
                fragment: self.slice(&spanned.span),
                position: spanned.span.start,
            }),
            _ => self.parse_comparison(),
        }
    }

    fn parse_group(&mut self, open: Range<usize>) -> Result<DecisionTree> {
        self.advance();
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                fragment: self.slice(&open),
                position: open.start,
                limit: self.max_depth,
            });
        }
        if self.peek().is_none() {
            return Err(ParseError::UnbalancedParenthesis {
                fragment: self.slice(&open),
                position: open.start,
            });
        }

        let inner = self.parse_or()?;

        match self.advance() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => {
                self.depth -= 1;
                Ok(inner)
            }
            Some(other) => Err(ParseError::UnexpectedToken {
                fragment: self.slice(&other.span),
                position: other.span.start,
            }),
            None => Err(ParseError::UnbalancedParenthesis {
                fragment: self.slice(&open),
                position: open.start,
            }),
        }
    }

    fn parse_comparison(&mut self) -> Result<DecisionTree> {
        let field = self.parse_field()?;
        let operator = self.parse_comparator(&field)?;
        let literal = self.parse_literal()?;
        Ok(DecisionTree::comparison(field, operator, literal))
    }

    fn parse_field(&mut self) -> Result<String> {
        match self.advance() {
            Some(Spanned {
                token: Token::Identifier(name),
                ..
            }) => Ok(name),
            Some(other) => Err(ParseError::InvalidOperand {
                fragment: self.slice(&other.span),
                position: other.span.start,
                expected: "a field name",
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.end(),
                expected: "a field name",
            }),
        }
    }

    fn parse_comparator(&mut self, field: &str) -> Result<Operator> {
        match self.advance() {
            Some(Spanned {
                token: Token::Comparator(symbol),
                span,
            }) => symbol
                .parse::<Operator>()
                .map_err(|_| ParseError::UnknownComparator {
                    fragment: symbol,
                    position: span.start,
                }),
            Some(other) => Err(ParseError::ExpectedComparator {
                field: field.to_string(),
                fragment: self.slice(&other.span),
                position: other.span.start,
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.end(),
                expected: "a comparator",
            }),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal> {
        match self.advance() {
            Some(Spanned {
                token: Token::Number(n),
                ..
            }) => Ok(Literal::Number(n)),
            Some(Spanned {
                token: Token::String(s),
                ..
            }) => Ok(Literal::String(s)),
            Some(other) => Err(ParseError::InvalidOperand {
                fragment: self.slice(&other.span),
                position: other.span.start,
                expected: "a quoted string or number",
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.end(),
                expected: "a quoted string or number",
            }),
        }
    }
}
