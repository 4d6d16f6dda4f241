//! # Environmental Loads & Evaluation Options
//!
//! Hazard intensities for one evaluation, plus the explicit modeling
//! choices the evaluator exposes rather than hard-coding (wind exposure
//! model, buoyancy toggle, deflection curve shape).
//!
//! ## Example
//!
//! ```rust
//! use pier_core::loads::{DeflectionShape, EvaluationOptions, HazardInput, WindModel};
//!
//! let hazards = HazardInput {
//!     wind_speed_ms: 40.0,
//!     water_depth_m: 5.0,
//!     seismic_acceleration_g: 0.3,
//! };
//! hazards.validate().unwrap();
//!
//! let options = EvaluationOptions {
//!     wind_model: WindModel::DeckOnly,
//!     ..EvaluationOptions::default()
//! };
//! assert!(options.include_buoyancy);
//! assert_eq!(options.deflection_shape, DeflectionShape::Cantilever);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Environmental loading for one evaluation, all values ≥ 0.
///
/// `water_depth_m` doubles as the submersion depth for buoyancy and as the
/// wave loading depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardInput {
    /// Wind speed (m/s)
    pub wind_speed_ms: f64,
    /// Water depth at the pier, also the buoyancy submersion depth (m)
    pub water_depth_m: f64,
    /// Seismic acceleration as a multiple of g = 9.81 m/s² (dimensionless)
    pub seismic_acceleration_g: f64,
}

impl HazardInput {
    /// A calm sea: no wind, no water, no earthquake.
    pub fn calm() -> Self {
        HazardInput {
            wind_speed_ms: 0.0,
            water_depth_m: 0.0,
            seismic_acceleration_g: 0.0,
        }
    }

    /// Validate that every hazard intensity is non-negative and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("wind_speed_ms", self.wind_speed_ms),
            ("water_depth_m", self.water_depth_m),
            ("seismic_acceleration_g", self.seismic_acceleration_g),
        ];
        for (name, value) in fields {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Hazard intensity cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Which lateral area the wind drag formula sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindModel {
    /// Deck lateral face only (length × thickness)
    DeckOnly,
    /// Deck lateral face plus the emerged pier face, D·max(H − depth, 0)
    DeckAndEmergedPier,
}

/// Shape function for the deflected pier.
///
/// Both shapes are zero at the fixed base and reach the maximum
/// deflection at the tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeflectionShape {
    /// Full cantilever tip-load elastic curve: x(z) = δ·z²(3H − z)/(2H³)
    Cantilever,
    /// Simplified quadratic approximation: x(z) = δ·(z/H)²
    Quadratic,
}

/// Explicit configuration for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Subtract buoyancy from self-weight before the axial stress check
    pub include_buoyancy: bool,
    /// Wind exposure area model
    pub wind_model: WindModel,
    /// Deflected-shape function
    pub deflection_shape: DeflectionShape,
    /// Number of samples in the deflection profile (minimum 20)
    pub deflection_samples: usize,
}

impl EvaluationOptions {
    /// Fewest samples that still draw a recognizable elastic curve
    pub const MIN_DEFLECTION_SAMPLES: usize = 20;

    /// Validate the option set.
    pub fn validate(&self) -> CalcResult<()> {
        if self.deflection_samples < Self::MIN_DEFLECTION_SAMPLES {
            return Err(CalcError::invalid_input(
                "deflection_samples",
                self.deflection_samples.to_string(),
                "At least 20 deflection samples are required",
            ));
        }
        Ok(())
    }
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        EvaluationOptions {
            include_buoyancy: true,
            wind_model: WindModel::DeckAndEmergedPier,
            deflection_shape: DeflectionShape::Cantilever,
            deflection_samples: 50,
        }
    }
}
