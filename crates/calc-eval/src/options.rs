//! Evaluator configuration.

use serde::{Deserialize, Serialize};

/// How a zero divisor is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// Plain IEEE-754 division: `1/0` is `inf`, `0/0` is `NaN`.
    #[default]
    Ieee,
    /// A zero divisor fails with [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero).
    Strict,
}

/// Options for an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    pub division: DivisionMode,
}

impl EvalOptions {
    /// Options with strict division.
    pub fn strict() -> Self {
        Self::default().with_division(DivisionMode::Strict)
    }

    pub fn with_division(mut self, division: DivisionMode) -> Self {
        self.division = division;
        self
    }
}
