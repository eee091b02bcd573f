//! Serializable evaluation outcome for CLI and WASM callers.

use calc_types::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::evaluator::Evaluator;
use crate::options::EvalOptions;

/// The structured JSON output for one evaluation.
///
/// `value` is `null` when the input was blank, when evaluation failed, and
/// for non-finite results (JSON has no `inf`/`NaN`); `display` always
/// carries the printable result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub success: bool,
    pub expression: String,
    pub value: Option<f64>,
    pub display: Option<String>,
    pub error: Option<Diagnostic>,
}

impl EvalReport {
    fn ok(expression: &str, value: Option<f64>) -> Self {
        Self {
            success: true,
            expression: expression.to_string(),
            value: value.filter(|v| v.is_finite()),
            display: value.map(|v| v.to_string()),
            error: None,
        }
    }

    fn failed(expression: &str, error: Diagnostic) -> Self {
        Self {
            success: false,
            expression: expression.to_string(),
            value: None,
            display: None,
            error: Some(error),
        }
    }
}

/// Evaluate an expression and package the outcome; never fails.
pub fn evaluate_to_report(expression: &str, options: EvalOptions) -> EvalReport {
    match Evaluator::with_options(options).evaluate(expression) {
        Ok(value) => EvalReport::ok(expression, value),
        Err(e) => EvalReport::failed(expression, e.to_diagnostic()),
    }
}
