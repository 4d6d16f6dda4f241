//! # Error Types
//!
//! Structured error types for pier_core. These errors carry enough context
//! to understand and fix issues programmatically: a domain violation always
//! names the offending field.
//!
//! Exceeding the material yield strength is **not** an error anywhere in
//! this crate - an overstressed pier is a fully computed result with
//! `safety_ratio > 1`, reported through [`crate::calculations::SafetyStatus`].
//!
//! ## Example
//!
//! ```rust
//! use pier_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_m: f64) -> CalcResult<()> {
//!     if height_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "pier_height_m",
//!             height_m.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pier_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for evaluation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (zero/negative length, negative hazard, etc.)
    ///
    /// This is the domain error of the stress formulas: a non-positive
    /// diameter or yield strength would divide by zero downstream, so it is
    /// rejected here instead of surfacing as a silent NaN.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Calculation failed (non-finite intermediate, degenerate section, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("pier_height_m", "-5.0", "Height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::material_not_found("granite").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CalcError::invalid_input("pier_diameter_m", "0", "must be positive").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_display_names_field() {
        let error = CalcError::invalid_input("water_depth_m", "-1", "Depth cannot be negative");
        let message = format!("{}", error);
        assert!(message.contains("water_depth_m"));
        assert!(message.contains("-1"));
    }
}
