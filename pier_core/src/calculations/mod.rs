//! # Structural Calculations
//!
//! The calculation module follows one pattern throughout:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, options) -> Result<*Result, CalcError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`pier`] - Marine bridge pier under combined wind/wave/seismic loading

pub mod pier;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use pier::{DeflectionSample, PierInput, PierResult};

/// Three-level safety classification derived from the safety ratio.
///
/// Band edges use strict comparisons, so a ratio of exactly 1.0 is
/// `Critical` (not `Failure`) and exactly 0.8 is `Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyStatus {
    /// Combined stress within the elastic range (ratio ≤ 0.8)
    Safe,
    /// Combined stress near the yield limit (0.8 < ratio ≤ 1.0)
    Critical,
    /// Combined stress exceeds yield strength (ratio > 1.0)
    Failure,
}

impl SafetyStatus {
    /// Classify a safety ratio into a status band.
    ///
    /// Total over all floats; NaN falls through both strict comparisons
    /// into `Safe`, but a NaN ratio cannot escape the evaluator because
    /// inputs are validated first.
    pub fn classify(safety_ratio: f64) -> Self {
        if safety_ratio > 1.0 {
            SafetyStatus::Failure
        } else if safety_ratio > 0.8 {
            SafetyStatus::Critical
        } else {
            SafetyStatus::Safe
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE",
            SafetyStatus::Critical => "CRITICAL",
            SafetyStatus::Failure => "FAILURE",
        }
    }

    /// One-line banner text for presentation layers
    pub fn banner(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE: stress within elastic range",
            SafetyStatus::Critical => "CRITICAL: stress near yield limit",
            SafetyStatus::Failure => "STRUCTURAL FAILURE: stress exceeds yield strength",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_bands() {
        assert_eq!(SafetyStatus::classify(0.0), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::classify(0.5), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::classify(0.9), SafetyStatus::Critical);
        assert_eq!(SafetyStatus::classify(2.5), SafetyStatus::Failure);
    }

    #[test]
    fn test_classification_boundaries() {
        // Strict comparisons: band edges belong to the lower band
        assert_eq!(SafetyStatus::classify(0.8), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::classify(0.799_999_9), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::classify(1.0), SafetyStatus::Critical);
        assert_eq!(SafetyStatus::classify(1.000_000_1), SafetyStatus::Failure);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SafetyStatus::Critical).unwrap();
        let roundtrip: SafetyStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SafetyStatus::Critical);
    }
}
