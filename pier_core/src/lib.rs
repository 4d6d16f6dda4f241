//! # pier_core - Marine Bridge Pier Evaluation Engine
//!
//! `pier_core` is the computational heart of Pierstat, estimating whether a
//! marine bridge pier survives combined wind, wave, and seismic loading using
//! closed-form Euler-Bernoulli beam theory and a simplified yield check.
//! All inputs and outputs are JSON-serializable, making the engine easy to
//! drive from any front end (CLI, GUI, or web service).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Faithful Approximations**: single-section, static, linear-elastic
//!   formulas; exceeding yield is a computed outcome, never an error
//!
//! ## Quick Start
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
//! println!("safety ratio = {:.2}", result.safety_ratio);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pier evaluation and safety classification
//! - [`geometry`] - Deck and pier dimensions with derived section properties
//! - [`loads`] - Environmental hazard inputs and evaluation options
//! - [`materials`] - Material catalog (Concrete, Steel)
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::pier::{calculate, DeflectionSample, PierInput, PierResult};
pub use calculations::SafetyStatus;
pub use errors::{CalcError, CalcResult};
pub use geometry::Geometry;
pub use loads::{DeflectionShape, EvaluationOptions, HazardInput, WindModel};
pub use materials::{Material, MaterialProperties};
