//! Core calc lexer — converts expression text to a token stream.
//!
//! Features:
//! - Decimal literals: one or more digits, optionally followed by `.` and
//!   zero or more digits (`12`, `3.`, `0.5`); no sign, exponent or leading `.`.
//!   Digits from any script count (`٣` is 3).
//! - Single-character operators `+ - * /` and parentheses
//! - Whitespace (Unicode whitespace and U+001C–U+001F) skipped
//! - Never fails: every other character becomes an `Unrecognized` token

use calc_types::{Operator, Span};

use crate::chars::{ascii_decimal, is_blank, is_decimal_digit};
use crate::token::{Token, TokenKind};

/// Lex `expression` into its tokens, in order of appearance.
///
/// Shorthand for `Lexer::new(expression).lex()`.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).lex()
}

/// The calc lexer.
///
/// Single left-to-right pass with no backtracking.
pub struct Lexer<'src> {
    /// The full expression text.
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based, in characters).
    col: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over the given expression.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire expression into a token stream.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(1),
        )
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let (start_line, start_col) = (self.line, self.col);
        let ch = self.advance()?;

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ch if is_decimal_digit(ch) => self.scan_number(start),
            _ => match Operator::try_from(ch) {
                Ok(op) => TokenKind::Operator(op),
                Err(_) => TokenKind::Unrecognized(ch.to_string()),
            },
        };

        Some(Token::new(kind, self.span_from(start_line, start_col)))
    }

    fn scan_number(&mut self, start: usize) -> TokenKind {
        // We already consumed the first digit
        self.skip_digits();

        // A trailing point is part of the literal even without digits after it
        if self.peek() == Some('.') {
            self.advance();
            self.skip_digits();
        }

        let text = &self.source[start..self.pos];
        match ascii_decimal(text).and_then(|ascii| ascii.parse::<f64>().ok()) {
            Some(value) => TokenKind::Number(value),
            None => TokenKind::Unrecognized(text.to_string()),
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(is_decimal_digit) {
            self.advance();
        }
    }
}
