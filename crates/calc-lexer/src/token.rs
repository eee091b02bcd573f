//! Token types for the calc lexer.
//!
//! Defines [`TokenKind`] covering every lexeme of an infix arithmetic
//! expression and [`Token`], which pairs a kind with a source [`Span`].

use calc_types::{Operator, Span};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the calc lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind an expression can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric literal: `12`, `3.`, `0.5`
    Number(f64),
    /// One of `+ - * /`
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Any other non-whitespace character, kept verbatim.
    ///
    /// The lexer never rejects input; the evaluator decides whether this
    /// is a usable atom.
    Unrecognized(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
            TokenKind::Unrecognized(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
