//! calc evaluator as a WASM module for browser environments.
//!
//! This crate exposes expression evaluation via `wasm-bindgen`. Every
//! export returns a JSON string, so failures reach JavaScript as data
//! instead of thrown exceptions.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { evaluate } from 'calc-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(evaluate("(2 + 3) * 4"));
//! // { success: true, expression: "(2 + 3) * 4", value: 20, display: "20", error: null }
//! ```

use calc_eval::{evaluate_to_report, EvalOptions, EvalReport};
use wasm_bindgen::prelude::*;

/// Evaluate an expression; IEEE division (`1/0` displays as `inf`).
///
/// Returns a JSON string containing an `EvalReport`:
/// ```json
/// {
///   "success": true,
///   "expression": "2 + 3 * 4",
///   "value": 14.0,
///   "display": "14",
///   "error": null
/// }
/// ```
///
/// On failure, `success` is `false` and `error` carries `code`,
/// `category` and `message`.
#[wasm_bindgen]
pub fn evaluate(expression: &str) -> String {
    to_json(&evaluate_to_report(expression, EvalOptions::default()))
}

/// Evaluate an expression, failing with E200 on a zero divisor.
#[wasm_bindgen]
pub fn evaluate_strict(expression: &str) -> String {
    to_json(&evaluate_to_report(expression, EvalOptions::strict()))
}

/// Return the evaluator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_json(report: &EvalReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"expression":"","value":null,"display":null,"error":{{"code":0,"category":"syntax","message":"Serialization error: {}"}}}}"#,
            e
        )
    })
}
