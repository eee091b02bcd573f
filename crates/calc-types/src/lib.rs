//! Shared types for the calc evaluator.
//!
//! This crate defines the operator set and its precedence table, source
//! spans, and the serializable diagnostic shape used by every surface
//! (library report, CLI, WASM).

mod error;
mod op;
mod span;

pub use error::{Diagnostic, ErrorCategory, ErrorCode};
pub use op::{Operator, UnknownOperator};
pub use span::Span;
