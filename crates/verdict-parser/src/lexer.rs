//! Rule text lexer
//!
//! Splits rule text into tokens with their byte spans. Whitespace is
//! skipped; `AND`/`OR` are upper-case keywords, so `ANDROID` or `and`
//! still lex as identifiers.

use crate::error::{ParseError, Result};
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Connectives
    #[token("AND")]
    And,

    #[token("OR")]
    Or,

    // Grouping
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Any run of comparator characters; the parser decides whether it is a
    // known comparator so `=>` can be reported as such.
    #[regex(r"[<>=!]+", |lex| lex.slice().to_string())]
    Comparator(String),

    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
    })]
    Number(f64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| unescape(lex.slice()))]
    String(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl Token {
    /// Short description used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Token::And | Token::Or => "connective",
            Token::LParen | Token::RParen => "parenthesis",
            Token::Comparator(_) => "comparator",
            Token::Number(_) => "number",
            Token::String(_) => "string",
            Token::Identifier(_) => "identifier",
        }
    }
}

/// A token and where it sits in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Tokenize the whole input, failing on the first lexical error
pub fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => return Err(lex_error(input, span)),
        }
    }

    Ok(tokens)
}

fn lex_error(input: &str, span: Range<usize>) -> ParseError {
    let rest = &input[span.start..];
    if rest.starts_with('"') || rest.starts_with('\'') {
        return ParseError::UnterminatedString {
            fragment: rest.to_string(),
            position: span.start,
        };
    }

    let fragment = &input[span.clone()];
    if fragment.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        // Out-of-range number such as `1e999`
        return ParseError::InvalidOperand {
            fragment: fragment.to_string(),
            position: span.start,
            expected: "a finite number",
        };
    }

    let fragment = rest.chars().next().map(String::from).unwrap_or_default();
    ParseError::InvalidCharacter {
        fragment,
        position: span.start,
    }
}

/// Strip the surrounding quotes and resolve backslash escapes
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
