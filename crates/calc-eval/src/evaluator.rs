//! Operator-precedence (shunting-yard) evaluation.
//!
//! Tokens are consumed in one left-to-right pass over two stacks: pending
//! operands and pending operators. A `(` marker on the operator stack is a
//! hard scope boundary; nothing beneath it is reduced until the matching
//! `)` arrives.

use calc_lexer::{ascii_decimal, is_blank, Lexer, Token, TokenKind};
use calc_types::Operator;

use crate::error::{EvalError, EvalResult};
use crate::options::{DivisionMode, EvalOptions};

/// The evaluator. Holds configuration only; all working state lives in the
/// per-call operand and operator stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: EvalOptions,
}

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    LeftParen,
}

/// Working state for one evaluation.
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<StackEntry>,
    division: DivisionMode,
}

impl Evaluator {
    /// Create an evaluator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given options.
    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    /// The options this evaluator was built with.
    pub fn options(&self) -> EvalOptions {
        self.options
    }

    /// Lex and evaluate an expression.
    ///
    /// Empty or whitespace-only input is not an error: it yields `Ok(None)`
    /// without lexing.
    pub fn evaluate(&self, expression: &str) -> EvalResult<Option<f64>> {
        if expression.chars().all(is_blank) {
            return Ok(None);
        }
        let tokens = Lexer::new(expression).lex();
        self.evaluate_tokens(&tokens).map(Some)
    }

    /// Evaluate an already-lexed token stream.
    ///
    /// An empty stream fails with [`EvalError::InvalidExpression`].
    pub fn evaluate_tokens(&self, tokens: &[Token]) -> EvalResult<f64> {
        let mut stacks = Stacks {
            operands: Vec::with_capacity(tokens.len() / 2 + 1),
            operators: Vec::new(),
            division: self.options.division,
        };

        for token in tokens {
            match &token.kind {
                TokenKind::LeftParen => stacks.operators.push(StackEntry::LeftParen),
                TokenKind::RightParen => stacks.close_group()?,
                TokenKind::Operator(op) => stacks.push_operator(*op)?,
                TokenKind::Number(value) => stacks.operands.push(*value),
                TokenKind::Unrecognized(text) => {
                    let value =
                        parse_decimal(text).ok_or_else(|| EvalError::InvalidToken(text.clone()))?;
                    stacks.operands.push(value);
                }
            }
        }

        stacks.finish()
    }
}

impl Stacks {
    /// Reduce back to the innermost `(` and drop it.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last() {
                Some(StackEntry::Operator(_)) => self.apply_top()?,
                Some(StackEntry::LeftParen) => {
                    self.operators.pop();
                    return Ok(());
                }
                None => return Err(EvalError::MismatchedParentheses),
            }
        }
    }

    /// Reduce every pending operator that binds at least as tightly as `op`
    /// (left associativity), then push `op`.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&StackEntry::Operator(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.apply_top()?;
        }
        self.operators.push(StackEntry::Operator(op));
        Ok(())
    }

    /// Pop the top operator and apply it to the top two operands.
    ///
    /// Operands come off as `b` then `a`, so the result is `a op b`.
    fn apply_top(&mut self) -> EvalResult<()> {
        let op = match self.operators.pop() {
            Some(StackEntry::Operator(op)) => op,
            Some(StackEntry::LeftParen) => return Err(EvalError::MismatchedParentheses),
            None => return Ok(()),
        };

        let (Some(b), Some(a)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::InsufficientOperands(op));
        };

        if op == Operator::Div && b == 0.0 && self.division == DivisionMode::Strict {
            return Err(EvalError::DivisionByZero);
        }

        self.operands.push(op.apply(a, b));
        Ok(())
    }

    /// Drain remaining operators and take the single result.
    fn finish(mut self) -> EvalResult<f64> {
        while !self.operators.is_empty() {
            // An unclosed `(` surfaces here as MismatchedParentheses.
            self.apply_top()?;
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

/// Fallback for unrecognized units: accept only the lexer's own decimal
/// shape (`digits[.digits]`, digits from any script).
fn parse_decimal(text: &str) -> Option<f64> {
    ascii_decimal(text)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_lexer::tokenize;

    fn eval(src: &str) -> EvalResult<f64> {
        Evaluator::new().evaluate_tokens(&tokenize(src))
    }

    #[test]
    fn test_empty_token_stream_is_invalid() {
        assert_eq!(
            Evaluator::new().evaluate_tokens(&[]),
            Err(EvalError::InvalidExpression)
        );
    }

    #[test]
    fn test_blank_input_is_absent() {
        let ev = Evaluator::new();
        assert_eq!(ev.evaluate(""), Ok(None));
        assert_eq!(ev.evaluate(" \t\n"), Ok(None));
        assert_eq!(ev.evaluate("\u{1C}\u{1F} "), Ok(None));
    }

    #[test]
    fn test_close_group_stops_at_marker() {
        // `*` below the `(` must not be applied when the group closes.
        assert_eq!(eval("2 * (3 + 4)"), Ok(14.0));
        assert_eq!(eval("(2 * 3) + 4"), Ok(10.0));
    }

    #[test]
    fn test_unclosed_group_in_drain() {
        assert_eq!(eval("(1 + 2"), Err(EvalError::MismatchedParentheses));
        assert_eq!(eval("1 + (2"), Err(EvalError::MismatchedParentheses));
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(eval("1 + 2)"), Err(EvalError::MismatchedParentheses));
    }

    #[test]
    fn test_strict_division() {
        let ev = Evaluator::with_options(EvalOptions::strict());
        assert_eq!(
            ev.evaluate_tokens(&tokenize("1 / 0")),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(ev.evaluate_tokens(&tokenize("0 / 2")), Ok(0.0));
        assert_eq!(ev.options().division, DivisionMode::Strict);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12"), Some(12.0));
        assert_eq!(parse_decimal("3."), Some(3.0));
        assert_eq!(parse_decimal("0.25"), Some(0.25));
        assert_eq!(parse_decimal("\u{0663}.\u{0665}"), Some(3.5));
        assert_eq!(parse_decimal(".5"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("+1"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("1e5"), None);
    }

    #[test]
    fn test_unrecognized_fallback_accepts_decimal_text() {
        use calc_types::Span;
        let tokens = vec![
            Token::new(TokenKind::Unrecognized("4.5".into()), Span::point(1, 1)),
            Token::new(TokenKind::Operator(Operator::Mul), Span::point(1, 4)),
            Token::new(TokenKind::Number(2.0), Span::point(1, 5)),
        ];
        assert_eq!(Evaluator::new().evaluate_tokens(&tokens), Ok(9.0));
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
    }
}
