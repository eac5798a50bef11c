//! # Error Types
//!
//! Structured error types for press_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Every rejection happens before formula evaluation begins: a calculator
//! either returns a fully computed result or one of these errors, never a
//! partially filled record.
//!
//! ## Example
//!
//! ```rust
//! use press_core::errors::{CalcError, CalcResult};
//!
//! fn validate_bore(bore_diameter_cm: f64) -> CalcResult<()> {
//!     if bore_diameter_cm <= 0.0 {
//!         return Err(CalcError::OutOfRange {
//!             field: "bore_diameter_cm".to_string(),
//!             value: bore_diameter_cm.to_string(),
//!             reason: "Bore diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for press_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required field is absent or blank
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// A field is present but does not parse to a finite number
    #[error("Invalid numeric value for '{field}': {value}")]
    InvalidNumeric { field: String, value: String },

    /// A field parsed but violates a range constraint (zero or negative
    /// where positivity is required, factor of safety of zero, ...)
    #[error("Out of range value for '{field}': {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// Report rendering failed (Typst compile error). Never produced by
    /// the formula modules themselves.
    #[error("Report rendering failed: {message}")]
    ReportRender { message: String },
}

impl CalcError {
    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        CalcError::MissingInput {
            field: field.into(),
        }
    }

    /// Create an InvalidNumeric error
    pub fn invalid_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidNumeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ReportRender error
    pub fn report_render(message: impl Into<String>) -> Self {
        CalcError::ReportRender {
            message: message.into(),
        }
    }

    /// True for errors the caller can fix by correcting an input field
    pub fn is_input_rejection(&self) -> bool {
        !matches!(self, CalcError::ReportRender { .. })
    }

    /// The input field the rejection refers to, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::MissingInput { field }
            | CalcError::InvalidNumeric { field, .. }
            | CalcError::OutOfRange { field, .. } => Some(field),
            CalcError::ReportRender { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::InvalidNumeric { .. } => "INVALID_NUMERIC",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::ReportRender { .. } => "REPORT_RENDER",
        }
    }
}
