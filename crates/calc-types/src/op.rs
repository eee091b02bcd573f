use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four binary arithmetic operators.
///
/// The set is closed: precedence and behaviour are resolved with a `match`,
/// never through a runtime lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Returned when a character is not one of `+ - * /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not an arithmetic operator: '{0}'")]
pub struct UnknownOperator(pub char);

impl Operator {
    /// All operators, in symbol order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Binding strength. Higher binds tighter; every operator is
    /// left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Returns the operator symbol for error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Compute `a op b` with plain `f64` semantics.
    ///
    /// Division by zero is not trapped here; callers that want a trap check
    /// the divisor before applying.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
