//! calc evaluator: operator-precedence evaluation of infix expressions.
//!
//! ```text
//! expression text → Lexer → tokens → Evaluator (operand + operator stacks) → f64
//! ```
//!
//! Evaluation is pure: every call owns its stacks, so one [`Evaluator`]
//! can be shared freely across threads.

mod error;
mod evaluator;
mod options;
mod report;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use options::{DivisionMode, EvalOptions};
pub use report::{evaluate_to_report, EvalReport};

/// Evaluate an expression with default options.
///
/// Empty or whitespace-only input yields `Ok(None)`.
pub fn evaluate(expression: &str) -> EvalResult<Option<f64>> {
    evaluate_with(expression, EvalOptions::default())
}

/// Evaluate an expression with the given options.
pub fn evaluate_with(expression: &str, options: EvalOptions) -> EvalResult<Option<f64>> {
    Evaluator::with_options(options).evaluate(expression)
}
