//! # Materials Catalog
//!
//! Mechanical constants for the structural materials supported by the
//! evaluation engine. The catalog is fixed and small: values never vary
//! across runs for the same material.
//!
//! ## Example
//!
//! ```rust
//! use pier_core::materials::Material;
//!
//! let props = Material::Concrete.properties();
//! assert_eq!(props.young_modulus_pa, 30e9);
//! assert_eq!(props.yield_strength_pa, 25e6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Structural materials supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Reinforced concrete (treated as homogeneous linear-elastic)
    Concrete,
    /// Structural steel
    Steel,
}

/// Mechanical constants for a material, all strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Young's modulus E (Pa)
    pub young_modulus_pa: f64,
    /// Yield strength (Pa)
    pub yield_strength_pa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
}

impl Material {
    /// All material variants for UI selection
    pub const ALL: [Material; 2] = [Material::Concrete, Material::Steel];

    /// Get the mechanical constants for this material
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::Concrete => MaterialProperties {
                young_modulus_pa: 30e9,
                yield_strength_pa: 25e6,
                density_kg_m3: 2500.0,
            },
            Material::Steel => MaterialProperties {
                young_modulus_pa: 210e9,
                yield_strength_pa: 250e6,
                density_kg_m3: 7850.0,
            },
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "concrete" | "c" => Ok(Material::Concrete),
            "steel" | "s" => Ok(Material::Steel),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Concrete => "Concrete",
            Material::Steel => "Steel",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        let concrete = Material::Concrete.properties();
        assert_eq!(concrete.young_modulus_pa, 30e9);
        assert_eq!(concrete.yield_strength_pa, 25e6);
        assert_eq!(concrete.density_kg_m3, 2500.0);

        let steel = Material::Steel.properties();
        assert_eq!(steel.young_modulus_pa, 210e9);
        assert_eq!(steel.yield_strength_pa, 250e6);
        assert_eq!(steel.density_kg_m3, 7850.0);
    }

    #[test]
    fn test_all_properties_positive() {
        for material in Material::ALL {
            let props = material.properties();
            assert!(props.young_modulus_pa > 0.0);
            assert!(props.yield_strength_pa > 0.0);
            assert!(props.density_kg_m3 > 0.0);
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            Material::from_str_flexible("concrete").unwrap(),
            Material::Concrete
        );
        assert_eq!(
            Material::from_str_flexible("  Steel ").unwrap(),
            Material::Steel
        );
        assert_eq!(Material::from_str_flexible("s").unwrap(), Material::Steel);
        assert!(Material::from_str_flexible("granite").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Material::Steel).unwrap();
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Material::Steel);
    }
}
