//! # Error Types
//!
//! Structured error types for anchor_core. Every validation failure is
//! raised at the point where a configuration is mutated, so a calculation
//! never runs on a malformed anchor.
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_mm",
//!             length_mm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for anchor_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for configuration and calculation operations.
///
/// A steel-weaker-than-bond hierarchy problem is *not* an error; it is
/// reported through [`crate::calculations::Verdict::HierarchyViolation`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Soil code or name outside the 13 Bustamante & Doix categories
    #[error("Invalid soil type: {value} (expected a code 0-12 or a soil name)")]
    InvalidSoilType { value: String },

    /// Grout injection method outside {0, 1}
    #[error("Invalid grout method: {value} (expected 0 = multiple high pressure, 1 = single low pressure)")]
    InvalidGroutMethod { value: String },

    /// Negative or non-finite design load
    #[error("Invalid design load: {value} kN - {reason}")]
    InvalidLoad { value: String, reason: String },

    /// Calculation requested before soil and grout were set
    #[error("Incomplete configuration: missing {}", .missing.join(", "))]
    IncompleteConfiguration { missing: Vec<String> },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSoilType error
    pub fn invalid_soil_type(value: impl Into<String>) -> Self {
        CalcError::InvalidSoilType { value: value.into() }
    }

    /// Create an InvalidGroutMethod error
    pub fn invalid_grout_method(value: impl Into<String>) -> Self {
        CalcError::InvalidGroutMethod { value: value.into() }
    }

    /// Create an InvalidLoad error
    pub fn invalid_load(value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidLoad {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an IncompleteConfiguration error listing the unset fields
    pub fn incomplete(missing: Vec<String>) -> Self {
        CalcError::IncompleteConfiguration { missing }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidSoilType { .. } => "INVALID_SOIL_TYPE",
            CalcError::InvalidGroutMethod { .. } => "INVALID_GROUT_METHOD",
            CalcError::InvalidLoad { .. } => "INVALID_LOAD",
            CalcError::IncompleteConfiguration { .. } => "INCOMPLETE_CONFIGURATION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_soil_type("13");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidSoilType\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_soil_type("-1").error_code(), "INVALID_SOIL_TYPE");
        assert_eq!(CalcError::invalid_grout_method("2").error_code(), "INVALID_GROUT_METHOD");
        assert_eq!(CalcError::invalid_load(-5.0, "negative").error_code(), "INVALID_LOAD");
        assert_eq!(
            CalcError::incomplete(vec!["soil_type".to_string()]).error_code(),
            "INCOMPLETE_CONFIGURATION"
        );
    }

    #[test]
    fn test_incomplete_message_lists_fields() {
        let error = CalcError::incomplete(vec!["soil_type".to_string(), "grout_method".to_string()]);
        assert_eq!(
            error.to_string(),
            "Incomplete configuration: missing soil_type, grout_method"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
