//! # Marine Bridge Pier Evaluation
//!
//! Evaluates a two-pier marine bridge under combined wind, wave, and seismic
//! loading using closed-form Euler-Bernoulli beam theory and a simplified
//! Von Mises yield check.
//!
//! ## Assumptions
//!
//! - Fixed-base cantilever piers, free/loaded at the top
//! - Solid circular pier section, single critical section at the base
//! - Static, linear-elastic response; no shear term in the combined stress
//! - Two piers sharing horizontal load and weight symmetrically
//!
//! ## Example
//!
//! ```rust
//! use pier_core::calculations::pier::{calculate, PierInput};
//! use pier_core::geometry::Geometry;
//! use pier_core::loads::{EvaluationOptions, HazardInput};
//! use pier_core::materials::Material;
//!
//! let input = PierInput {
//!     label: "P-1".to_string(),
//!     geometry: Geometry {
//!         deck_length_m: 200.0,
//!         deck_width_m: 15.0,
//!         deck_thickness_m: 2.5,
//!         pier_height_m: 30.0,
//!         pier_diameter_m: 4.0,
//!     },
//!     material: Material::Concrete,
//!     hazards: HazardInput {
//!         wind_speed_ms: 40.0,
//!         water_depth_m: 5.0,
//!         seismic_acceleration_g: 0.3,
//!     },
//! };
//!
//! let result = calculate(&input, &EvaluationOptions::default()).unwrap();
//! println!("Base moment: {:.0} N·m", result.base_moment_nm);
//! println!("Safety ratio: {:.2} ({})", result.safety_ratio, result.status);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::SafetyStatus;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::Geometry;
use crate::loads::{DeflectionShape, EvaluationOptions, HazardInput};
use crate::materials::Material;

/// Gravitational acceleration (m/s²)
pub const GRAVITY_MS2: f64 = 9.81;

/// Seawater density (kg/m³)
pub const WATER_DENSITY_KG_M3: f64 = 1025.0;

/// Air density (kg/m³)
pub const AIR_DENSITY_KG_M3: f64 = 1.2;

/// Drag coefficient for the wave force on a circular pier
pub const WAVE_DRAG_COEFFICIENT: f64 = 1.5;

/// Input parameters for a pier evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "geometry": {
///     "deck_length_m": 200.0,
///     "deck_width_m": 15.0,
///     "deck_thickness_m": 2.5,
///     "pier_height_m": 30.0,
///     "pier_diameter_m": 4.0
///   },
///   "material": "Concrete",
///   "hazards": {
///     "wind_speed_ms": 40.0,
///     "water_depth_m": 5.0,
///     "seismic_acceleration_g": 0.3
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PierInput {
    /// User label for this evaluation (e.g., "P-1", "North Crossing")
    pub label: String,

    /// Deck and pier dimensions
    pub geometry: Geometry,

    /// Structural material for both deck and piers
    pub material: Material,

    /// Environmental loading
    pub hazards: HazardInput,
}

impl PierInput {
    /// Validate geometry and hazards together.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.hazards.validate()?;
        Ok(())
    }
}

/// One sample of the deflected pier shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionSample {
    /// Height above the pier base (m)
    pub height_m: f64,
    /// Horizontal displacement at that height (m)
    pub displacement_m: f64,
}

/// Results from a pier evaluation.
///
/// Every force, stress, and the safety ratio are reported even when the
/// pier is overstressed - `safety_ratio > 1` is a computed outcome, not
/// an error.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "wind_force_n": 576000.0,
///   "wave_force_n": 76875.0,
///   "seismic_force_n": 60728674.3,
///   "base_moment_nm": 928402302.1,
///   "axial_stress_pa": 8004114.3,
///   "bending_stress_pa": 73879907.8,
///   "combined_stress_pa": 74312223.9,
///   "safety_ratio": 2.97,
///   "status": "Failure"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PierResult {
    // === Mass & Buoyancy ===
    /// Total structure mass, deck plus both piers (kg)
    pub total_mass_kg: f64,

    /// Archimedes force on the submerged pier volume, both piers (N)
    pub buoyancy_force_n: f64,

    /// Total weight minus buoyancy (N)
    pub net_weight_n: f64,

    // === Horizontal Forces ===
    /// Wind drag force on the exposed lateral area (N)
    pub wind_force_n: f64,

    /// Hydrodynamic wave force on the submerged pier face (N)
    pub wave_force_n: f64,

    /// Seismic inertia force, F = m·a (N)
    pub seismic_force_n: f64,

    /// Horizontal force share of a single pier (N)
    pub horizontal_force_per_pier_n: f64,

    // === Base Moment ===
    /// Overturning moment at the pier base, both piers (N·m)
    ///
    /// Wind acts at the pier top, the wave resultant at half the water
    /// depth, the seismic force at mid-height.
    pub base_moment_nm: f64,

    // === Stress & Safety ===
    /// Axial compression stress at the base of one pier (Pa)
    pub axial_stress_pa: f64,

    /// Bending stress at the extreme fiber of one pier base (Pa)
    pub bending_stress_pa: f64,

    /// Combined stress sqrt(axial² + bending²), simplified Von Mises (Pa)
    pub combined_stress_pa: f64,

    /// combined_stress / yield_strength (dimensionless)
    pub safety_ratio: f64,

    /// Three-level classification of the safety ratio
    pub status: SafetyStatus,

    // === Deflection ===
    /// Cantilever tip deflection of one pier (m)
    pub max_deflection_m: f64,

    /// Deflected shape from base (height 0, displacement 0) to tip
    pub deflection_profile: Vec<DeflectionSample>,

    // === Section Properties (for reference) ===
    /// Pier cross-section area A = π·(D/2)² (m²)
    pub pier_cross_section_area_m2: f64,

    /// Pier second moment of area I = π·D⁴/64 (m⁴)
    pub pier_moment_of_inertia_m4: f64,
}

impl PierResult {
    /// Check if the evaluation landed in the Safe band (ratio ≤ 0.8)
    pub fn passes(&self) -> bool {
        self.status == SafetyStatus::Safe
    }

    /// Utilization of the yield strength, as a percentage
    pub fn utilization_percent(&self) -> f64 {
        self.safety_ratio * 100.0
    }
}

/// Evaluate a pier under combined loading.
///
/// Pure function: no side effects, bit-for-bit reproducible for identical
/// inputs. Either returns a complete [`PierResult`] or fails fast with a
/// [`CalcError`] naming the offending field - never a partial result.
///
/// # Arguments
///
/// * `input` - Label, geometry, material, and hazards
/// * `options` - Buoyancy toggle, wind model, deflection shape, sample count
///
/// # Returns
///
/// * `Ok(PierResult)` - Complete evaluation, even for overstressed piers
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &PierInput, options: &EvaluationOptions) -> CalcResult<PierResult> {
    input.validate()?;
    options.validate()?;

    let geometry = &input.geometry;
    let hazards = &input.hazards;
    let props = input.material.properties();

    // Section properties of one pier
    let area_m2 = geometry.pier_cross_section_area_m2();
    let inertia_m4 = geometry.pier_moment_of_inertia_m4();

    // === Mass & Buoyancy ===

    let total_mass_kg = (geometry.deck_volume_m3() + geometry.pier_volume_m3()) * props.density_kg_m3;
    let total_weight_n = total_mass_kg * GRAVITY_MS2;

    // Submerged volume uses the raw water depth for both piers
    let submerged_volume_m3 = area_m2 * hazards.water_depth_m * 2.0;
    let buoyancy_force_n = submerged_volume_m3 * WATER_DENSITY_KG_M3 * GRAVITY_MS2;
    let net_weight_n = total_weight_n - buoyancy_force_n;

    // === Horizontal Forces ===

    let wind_force_n = 0.5
        * AIR_DENSITY_KG_M3
        * hazards.wind_speed_ms.powi(2)
        * geometry.wind_exposure_area_m2(hazards.water_depth_m, options.wind_model);

    let wave_force_n = 0.5
        * WATER_DENSITY_KG_M3
        * WAVE_DRAG_COEFFICIENT
        * geometry.pier_diameter_m
        * hazards.water_depth_m.powi(2);

    let seismic_force_n = total_mass_kg * hazards.seismic_acceleration_g * GRAVITY_MS2;

    let horizontal_force_per_pier_n = (wind_force_n + wave_force_n + seismic_force_n) / 2.0;

    // === Base Moment ===
    // Lever arms: wind at the pier top, wave resultant at depth/2, seismic
    // inertia at mid-height.
    let base_moment_nm = wind_force_n * geometry.pier_height_m
        + wave_force_n * (hazards.water_depth_m / 2.0)
        + seismic_force_n * (geometry.pier_height_m / 2.0);

    // === Stress & Safety ===
    // Per-pier shares: half the weight, half the moment.

    let axial_weight_n = if options.include_buoyancy {
        net_weight_n
    } else {
        total_weight_n
    };
    let axial_stress_pa = (axial_weight_n / 2.0) / area_m2;

    let bending_stress_pa =
        (base_moment_nm / 2.0 * (geometry.pier_diameter_m / 2.0)) / inertia_m4;

    let combined_stress_pa = (axial_stress_pa.powi(2) + bending_stress_pa.powi(2)).sqrt();
    if !combined_stress_pa.is_finite() {
        return Err(CalcError::calculation_failed(
            "pier",
            "Combined stress is not finite; inputs are outside the physical range",
        ));
    }

    let safety_ratio = combined_stress_pa / props.yield_strength_pa;
    let status = SafetyStatus::classify(safety_ratio);

    // === Deflection Profile ===

    let max_deflection_m = (horizontal_force_per_pier_n * geometry.pier_height_m.powi(3))
        / (3.0 * props.young_modulus_pa * inertia_m4);

    let deflection_profile = sample_deflection_profile(
        max_deflection_m,
        geometry.pier_height_m,
        options.deflection_shape,
        options.deflection_samples,
    );

    Ok(PierResult {
        total_mass_kg,
        buoyancy_force_n,
        net_weight_n,
        wind_force_n,
        wave_force_n,
        seismic_force_n,
        horizontal_force_per_pier_n,
        base_moment_nm,
        axial_stress_pa,
        bending_stress_pa,
        combined_stress_pa,
        safety_ratio,
        status,
        max_deflection_m,
        deflection_profile,
        pier_cross_section_area_m2: area_m2,
        pier_moment_of_inertia_m4: inertia_m4,
    })
}

/// Sample the deflected cantilever shape at evenly spaced heights.
///
/// The first sample is the fixed base (displacement exactly 0); the last
/// sample is the pier tip at the maximum deflection.
fn sample_deflection_profile(
    max_deflection_m: f64,
    height_m: f64,
    shape: DeflectionShape,
    samples: usize,
) -> Vec<DeflectionSample> {
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let z = height_m * (i as f64 / last);
            let displacement_m = match shape {
                DeflectionShape::Cantilever => {
                    // Tip-load elastic curve: x(z) = δ·z²(3H − z)/(2H³)
                    max_deflection_m * (z.powi(2) * (3.0 * height_m - z))
                        / (2.0 * height_m.powi(3))
                }
                DeflectionShape::Quadratic => max_deflection_m * (z / height_m).powi(2),
            };
            DeflectionSample {
                height_m: z,
                displacement_m,
            }
        })
        .collect()
}
