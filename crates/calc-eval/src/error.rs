//! Evaluation error types.

use calc_types::{Diagnostic, ErrorCode, Operator};
use thiserror::Error;

/// Why an expression could not be reduced to a number.
///
/// Every variant is deterministic and input-driven; retrying the same
/// expression always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// A scanned unit that is neither a number, operator nor parenthesis.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// An operator was applied with fewer than two operands available.
    #[error("not enough operands for operator {0}")]
    InsufficientOperands(Operator),

    /// The stacks did not reduce to exactly one value.
    #[error("invalid expression")]
    InvalidExpression,

    /// A zero divisor under [`DivisionMode::Strict`](crate::DivisionMode::Strict).
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// The stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MismatchedParentheses => ErrorCode::MISMATCHED_PARENTHESES,
            Self::InvalidToken(_) => ErrorCode::INVALID_TOKEN,
            Self::InsufficientOperands(_) => ErrorCode::INSUFFICIENT_OPERANDS,
            Self::InvalidExpression => ErrorCode::INVALID_EXPRESSION,
            Self::DivisionByZero => ErrorCode::DIVISION_BY_ZERO,
        }
    }

    /// Convert into the serializable shape used by reports.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use calc_types::ErrorCategory;

    #[test]
    fn test_messages() {
        assert_eq!(
            EvalError::MismatchedParentheses.to_string(),
            "mismatched parentheses"
        );
        assert_eq!(
            EvalError::InvalidToken("&".into()).to_string(),
            "invalid token: &"
        );
        assert_eq!(
            EvalError::InsufficientOperands(Operator::Add).to_string(),
            "not enough operands for operator +"
        );
        assert_eq!(EvalError::InvalidExpression.to_string(), "invalid expression");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            EvalError::MismatchedParentheses,
            EvalError::InvalidToken("x".into()),
            EvalError::InsufficientOperands(Operator::Mul),
            EvalError::InvalidExpression,
            EvalError::DivisionByZero,
        ];
        let mut codes: Vec<_> = errors.iter().map(EvalError::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_to_diagnostic() {
        let d = EvalError::DivisionByZero.to_diagnostic();
        assert_eq!(d.code, ErrorCode::DIVISION_BY_ZERO);
        assert_eq!(d.category, ErrorCategory::Arithmetic);
        assert_eq!(d.message, "division by zero");

        let d = EvalError::InvalidToken("?".into()).to_diagnostic();
        assert_eq!(d.category, ErrorCategory::Syntax);
        assert_eq!(d.message, "invalid token: ?");
    }
}
