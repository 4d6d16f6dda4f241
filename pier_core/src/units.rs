//! # Unit Types
//!
//! Type-safe wrappers for SI engineering units. Simple newtype wrappers
//! rather than a full units library:
//! - marine structural work uses a consistent SI set
//! - JSON serialization stays clean (just numbers)
//! - minimal runtime overhead
//!
//! The engine computes in base SI (m, N, Pa); these wrappers mostly serve
//! presentation layers converting to kN and MPa.
//!
//! ## Example
//!
//! ```rust
//! use pier_core::units::{MegaPascals, Newtons, KiloNewtons, Pascals};
//!
//! let stress = Pascals(74_312_223.9);
//! let mpa: MegaPascals = stress.into();
//! assert!((mpa.0 - 74.312).abs() < 0.001);
//!
//! let force: KiloNewtons = Newtons(576_000.0).into();
//! assert_eq!(force.0, 576.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1e6)
    }
}

impl From<MegaPascals> for Pascals {
    fn from(mpa: MegaPascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<NewtonMeters> for KiloNewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KiloNewtonMeters(nm.0 / 1000.0)
    }
}

impl From<KiloNewtonMeters> for NewtonMeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let mm: Millimeters = Meters(0.732).into();
        assert!((mm.0 - 732.0).abs() < 1e-9);
        let back: Meters = mm.into();
        assert!((back.0 - 0.732).abs() < 1e-12);
    }

    #[test]
    fn test_force_conversion() {
        let kn: KiloNewtons = Newtons(576_000.0).into();
        assert_eq!(kn.0, 576.0);
    }

    #[test]
    fn test_stress_conversion() {
        let mpa: MegaPascals = Pascals(25e6).into();
        assert_eq!(mpa.0, 25.0);
    }

    #[test]
    fn test_moment_conversion() {
        let knm: KiloNewtonMeters = NewtonMeters(928_402_302.0).into();
        assert!((knm.0 - 928_402.302).abs() < 1e-6);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Pascals(25e6)).unwrap();
        assert_eq!(json, "25000000.0");
        let roundtrip: Pascals = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Pascals(25e6));
    }
}
