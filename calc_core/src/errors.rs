//! # Error Types
//!
//! Structured error types for calc_core. Every calculator returns a
//! [`CalcResult`]; expected bad input is always reported through
//! [`CalcError`], never through a panic.
//!
//! Errors fall into two kinds (see [`ErrorKind`]):
//!
//! - **Parse** - a raw field could not be turned into the expected type
//! - **Domain** - the value parsed fine but violates a precondition
//!
//! Qualitatively special results (vertical slope, complex roots, a corpus
//! that never depletes) are *not* errors. They are variants of the result
//! types themselves.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius: f64) -> CalcResult<()> {
//!     if radius <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "radius",
//!             radius.to_string(),
//!             "Radius must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Broad classification of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input could not be parsed into the expected type
    Parse,
    /// Input parsed but violates a domain precondition
    Domain,
    /// Broken internal invariant
    Internal,
}

/// Structured error type for calculation operations.
///
/// Each variant names the offending field so a presentation layer can show
/// the message right next to it.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A raw value could not be parsed (empty, non-numeric, malformed date)
    #[error("Could not parse '{field}': '{value}' - {reason}")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input value is out of its domain (negative, zero divisor, ordering)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Wrong number of fields supplied for an "exactly N of" calculator
    #[error("Expected exactly {expected} of [{}], got {provided}", .fields.join(", "))]
    FieldCount {
        fields: Vec<String>,
        expected: usize,
        provided: usize,
    },

    /// Malformed arithmetic expression
    #[error("Invalid expression '{expression}' at position {position}: {reason}")]
    InvalidExpression {
        expression: String,
        position: usize,
        reason: String,
    },

    /// No calculator registered under this name
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// Generic internal error (should be unreachable)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a ParseError
    pub fn parse_error(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FieldCount error
    pub fn field_count(fields: &[&str], expected: usize, provided: usize) -> Self {
        CalcError::FieldCount {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            expected,
            provided,
        }
    }

    /// Create an InvalidExpression error
    pub fn invalid_expression(expression: impl Into<String>, position: usize, reason: impl Into<String>) -> Self {
        CalcError::InvalidExpression {
            expression: expression.into(),
            position,
            reason: reason.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Classify the error as a parse, domain or internal failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::ParseError { .. }
            | CalcError::MissingField { .. }
            | CalcError::InvalidExpression { .. }
            | CalcError::UnknownCalculator { .. } => ErrorKind::Parse,
            CalcError::InvalidInput { .. } | CalcError::FieldCount { .. } => ErrorKind::Domain,
            CalcError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::ParseError { field, .. }
            | CalcError::MissingField { field }
            | CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FieldCount { .. } => "FIELD_COUNT",
            CalcError::InvalidExpression { .. } => "INVALID_EXPRESSION",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("radius", "-5", "Radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_calculator("abacus").error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CalcError::parse_error("a", "x", "not a number").kind(), ErrorKind::Parse);
        assert_eq!(CalcError::field_count(&["a", "b", "c"], 2, 3).kind(), ErrorKind::Domain);
        assert_eq!(CalcError::internal("oops").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_field_count_message() {
        let error = CalcError::field_count(&["a", "b", "c"], 2, 1);
        assert_eq!(error.to_string(), "Expected exactly 2 of [a, b, c], got 1");
        assert_eq!(error.field(), None);
    }
}
