//! # Error Types
//!
//! Structured error types for convert_core. Every variant carries enough
//! context (unit ids, dimension names, paths) for a caller to report the
//! problem or act on it programmatically.
//!
//! Two failure styles coexist in this crate:
//!
//! - **Hard-fail** operations such as [`convert`](crate::convert::convert)
//!   return a [`ConvertError`].
//! - **Soft-fail** operations such as
//!   [`relative_scale`](crate::convert::relative_scale) and
//!   [`conversion_formula`](crate::convert::conversion_formula) never error;
//!   they fall back to a sentinel value instead.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::errors::{ConvertError, ConvertResult};
//!
//! fn check_precision(precision: usize) -> ConvertResult<()> {
//!     if precision > 10 {
//!         return Err(ConvertError::invalid_input(
//!             "precision",
//!             precision.to_string(),
//!             "Precision must be between 0 and 10",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_precision(4).is_ok());
//! assert!(check_precision(11).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for convert_core operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structured error type for conversion operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvertError {
    /// The two ids do not both resolve within one dimension.
    ///
    /// Covers an unknown id on either side as well as a cross-dimension pair.
    #[error("Invalid units specified or units from different dimensions: '{from}' -> '{to}'")]
    IncompatibleOrUnknownUnits { from: String, to: String },

    /// A single unit id is not in the registry
    #[error("Unknown unit: '{unit_id}'")]
    UnknownUnit { unit_id: String },

    /// A dimension name is not one of length, area, volume
    #[error("Unknown dimension: '{name}'")]
    UnknownDimension { name: String },

    /// Two table entries share the same id
    #[error("Duplicate unit id '{unit_id}' in {first} and {second} tables")]
    DuplicateUnitId {
        unit_id: String,
        first: String,
        second: String,
    },

    /// A dimension table has no units
    #[error("Dimension '{dimension}' has no units")]
    EmptyDimension { dimension: String },

    /// A unit factor is zero, negative or not finite
    #[error("Invalid factor for unit '{unit_id}': {factor}")]
    InvalidFactor { unit_id: String, factor: f64 },

    /// The base unit of a dimension is missing or not an identity mapping
    #[error("Invalid base unit for dimension '{dimension}': {reason}")]
    InvalidBaseUnit { dimension: String, reason: String },

    /// An input value is invalid (out of range, wrong dimension, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

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

    /// Settings file written by an incompatible version
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl ConvertError {
    /// Create an IncompatibleOrUnknownUnits error
    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        ConvertError::IncompatibleOrUnknownUnits {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit_id: impl Into<String>) -> Self {
        ConvertError::UnknownUnit {
            unit_id: unit_id.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while building the unit registry.
    ///
    /// These are fatal at startup rather than per-call failures.
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            ConvertError::DuplicateUnitId { .. }
                | ConvertError::EmptyDimension { .. }
                | ConvertError::InvalidFactor { .. }
                | ConvertError::InvalidBaseUnit { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::IncompatibleOrUnknownUnits { .. } => "INCOMPATIBLE_OR_UNKNOWN_UNITS",
            ConvertError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConvertError::UnknownDimension { .. } => "UNKNOWN_DIMENSION",
            ConvertError::DuplicateUnitId { .. } => "DUPLICATE_UNIT_ID",
            ConvertError::EmptyDimension { .. } => "EMPTY_DIMENSION",
            ConvertError::InvalidFactor { .. } => "INVALID_FACTOR",
            ConvertError::InvalidBaseUnit { .. } => "INVALID_BASE_UNIT",
            ConvertError::InvalidInput { .. } => "INVALID_INPUT",
            ConvertError::FileError { .. } => "FILE_ERROR",
            ConvertError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ConvertError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConvertError::incompatible("liter", "meter");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"IncompatibleOrUnknownUnits\""));

        let roundtrip: ConvertError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ConvertError::unknown_unit("furlong").error_code(), "UNKNOWN_UNIT");
        assert_eq!(
            ConvertError::incompatible("meter", "square-meter").error_code(),
            "INCOMPATIBLE_OR_UNKNOWN_UNITS"
        );
    }

    #[test]
    fn test_display_names_both_units() {
        let msg = ConvertError::incompatible("liter", "meter").to_string();
        assert!(msg.contains("'liter'"));
        assert!(msg.contains("'meter'"));
    }

    #[test]
    fn test_registry_error_classification() {
        let dup = ConvertError::DuplicateUnitId {
            unit_id: "meter".to_string(),
            first: "length".to_string(),
            second: "area".to_string(),
        };
        assert!(dup.is_registry_error());
        assert!(!ConvertError::unknown_unit("x").is_registry_error());
    }
}
