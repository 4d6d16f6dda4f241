//! # Structure Geometry
//!
//! Deck and pier dimensions with the derived section properties the stress
//! formulas need. The pier is a solid circular cantilever; the structure
//! carries two piers sharing load symmetrically.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "deck_length_m": 200.0,
//!   "deck_width_m": 15.0,
//!   "deck_thickness_m": 2.5,
//!   "pier_height_m": 30.0,
//!   "pier_diameter_m": 4.0
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::loads::WindModel;

/// Dimensions of the bridge structure, all in meters and strictly positive.
///
/// Diameter larger than height is physically odd but deliberately not
/// rejected; only zero/negative values are invalid because they divide by
/// zero in the stress formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Deck span length (m)
    pub deck_length_m: f64,
    /// Deck width (m)
    pub deck_width_m: f64,
    /// Deck thickness (m) — also the deck's lateral face height for wind
    pub deck_thickness_m: f64,
    /// Pier height from seabed to deck soffit (m)
    pub pier_height_m: f64,
    /// Pier diameter, solid circular section (m)
    pub pier_diameter_m: f64,
}

impl Geometry {
    /// Validate that every dimension is strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("deck_length_m", self.deck_length_m),
            ("deck_width_m", self.deck_width_m),
            ("deck_thickness_m", self.deck_thickness_m),
            ("pier_height_m", self.pier_height_m),
            ("pier_diameter_m", self.pier_diameter_m),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Dimension must be strictly positive",
                ));
            }
        }
        Ok(())
    }

    /// Cross-sectional area of one pier: A = π·(D/2)² (m²)
    pub fn pier_cross_section_area_m2(&self) -> f64 {
        PI * (self.pier_diameter_m / 2.0).powi(2)
    }

    /// Second moment of area of one pier: I = π·D⁴/64 (m⁴)
    pub fn pier_moment_of_inertia_m4(&self) -> f64 {
        PI * self.pier_diameter_m.powi(4) / 64.0
    }

    /// Total pier volume, both piers (m³)
    pub fn pier_volume_m3(&self) -> f64 {
        self.pier_cross_section_area_m2() * self.pier_height_m * 2.0
    }

    /// Deck volume (m³)
    pub fn deck_volume_m3(&self) -> f64 {
        self.deck_length_m * self.deck_width_m * self.deck_thickness_m
    }

    /// Emerged pier height above the waterline, clamped to ≥ 0 (m)
    pub fn emerged_pier_height_m(&self, water_depth_m: f64) -> f64 {
        (self.pier_height_m - water_depth_m).max(0.0)
    }

    /// Lateral area exposed to wind for the selected wind model (m²)
    ///
    /// The deck contributes its lateral face (length × thickness); the
    /// `DeckAndEmergedPier` model adds the projected face of the pier above
    /// the waterline.
    pub fn wind_exposure_area_m2(&self, water_depth_m: f64, model: WindModel) -> f64 {
        let deck_face = self.deck_length_m * self.deck_thickness_m;
        match model {
            WindModel::DeckOnly => deck_face,
            WindModel::DeckAndEmergedPier => {
                deck_face + self.pier_diameter_m * self.emerged_pier_height_m(water_depth_m)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry() -> Geometry {
        Geometry {
            deck_length_m: 200.0,
            deck_width_m: 15.0,
            deck_thickness_m: 2.5,
            pier_height_m: 30.0,
            pier_diameter_m: 4.0,
        }
    }

    #[test]
    fn test_section_properties() {
        let geometry = test_geometry();

        // A = π·(4/2)² = 4π = 12.566...
        assert!((geometry.pier_cross_section_area_m2() - 12.566_370_614_359_172).abs() < 1e-9);

        // I = π·4⁴/64 = 4π = 12.566... (coincidence of D = 4)
        assert!((geometry.pier_moment_of_inertia_m4() - 12.566_370_614_359_172).abs() < 1e-9);
    }

    #[test]
    fn test_volumes() {
        let geometry = test_geometry();

        // Two piers: 4π · 30 · 2 = 753.98...
        assert!((geometry.pier_volume_m3() - 753.982_236).abs() < 1e-3);

        // Deck: 200 · 15 · 2.5 = 7500
        assert!((geometry.deck_volume_m3() - 7500.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_exposure_area() {
        let geometry = test_geometry();

        // Deck face only: 200 · 2.5 = 500
        assert_eq!(
            geometry.wind_exposure_area_m2(5.0, WindModel::DeckOnly),
            500.0
        );

        // Deck + emerged pier: 500 + 4·(30 − 5) = 600
        assert_eq!(
            geometry.wind_exposure_area_m2(5.0, WindModel::DeckAndEmergedPier),
            600.0
        );
    }

    #[test]
    fn test_emerged_height_clamped() {
        let geometry = test_geometry();
        assert_eq!(geometry.emerged_pier_height_m(50.0), 0.0);
        assert_eq!(
            geometry.wind_exposure_area_m2(50.0, WindModel::DeckAndEmergedPier),
            500.0
        );
    }

    #[test]
    fn test_validation_rejects_zero_diameter() {
        let mut geometry = test_geometry();
        geometry.pier_diameter_m = 0.0;
        let error = geometry.validate().unwrap_err();
        assert_eq!(error.error_code(), "INVALID_INPUT");
        assert!(format!("{}", error).contains("pier_diameter_m"));
    }

    #[test]
    fn test_validation_rejects_nan() {
        let mut geometry = test_geometry();
        geometry.deck_width_m = f64::NAN;
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let geometry = test_geometry();
        let json = serde_json::to_string_pretty(&geometry).unwrap();
        let roundtrip: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geometry, roundtrip);
    }
}
