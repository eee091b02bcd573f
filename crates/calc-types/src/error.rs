use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// The token stream does not form a valid expression.
    Syntax,
    /// The expression is well formed but its arithmetic was refused.
    Arithmetic,
}

/// Numeric error code (E100–E299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const MISMATCHED_PARENTHESES: Self = Self(100);
    pub const INVALID_TOKEN: Self = Self(101);
    pub const INSUFFICIENT_OPERANDS: Self = Self(102);
    pub const INVALID_EXPRESSION: Self = Self(103);

    // ── Arithmetic errors (E200–E299) ──
    pub const DIVISION_BY_ZERO: Self = Self(200);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            200..=299 => ErrorCategory::Arithmetic,
            _ => ErrorCategory::Syntax,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// A structured evaluation failure, as handed to programmatic callers.
///
/// Surfaces render these; they must not parse the free-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code (e.g., E101).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic; the category follows from the code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.code, self.category, self.message)
    }
}
