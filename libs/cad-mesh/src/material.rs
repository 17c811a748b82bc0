//! # Display Materials
//!
//! Surface appearance a viewer applies to a built mesh. Each family has a
//! fixed preset; paper airplanes take their color from the parameters and
//! render both faces of their open surface.

use serde::Serialize;

/// Box color.
pub const BOX_COLOR: &str = "#2196f3";
/// Cylinder color.
pub const CYLINDER_COLOR: &str = "#4caf50";
/// Gear color.
pub const GEAR_COLOR: &str = "#1976d2";

/// Physically based surface description for a viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// `#rrggbb` base color
    pub color: String,
    /// 0 = dielectric, 1 = metal
    pub metalness: f64,
    /// 0 = mirror, 1 = fully diffuse
    pub roughness: f64,
    /// Render back faces too
    pub double_sided: bool,
    /// Use face normals instead of interpolated vertex normals
    pub flat_shading: bool,
}

impl Material {
    /// Single-sided, smooth-shaded material for closed solids.
    pub fn solid(color: impl Into<String>, metalness: f64, roughness: f64) -> Self {
        Self {
            color: color.into(),
            metalness,
            roughness,
            double_sided: false,
            flat_shading: false,
        }
    }

    /// Matte, double-sided, flat-shaded material for folded paper.
    pub fn paper(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            metalness: 0.0,
            roughness: 0.7,
            double_sided: true,
            flat_shading: true,
        }
    }

    pub fn for_box() -> Self {
        Self::solid(BOX_COLOR, 0.1, 0.5)
    }

    pub fn for_cylinder() -> Self {
        Self::solid(CYLINDER_COLOR, 0.2, 0.4)
    }

    pub fn for_gear() -> Self {
        Self::solid(GEAR_COLOR, 0.5, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_presets() {
        let gear = Material::for_gear();
        assert_eq!(gear.color, "#1976d2");
        assert_eq!(gear.metalness, 0.5);
        assert!(!gear.double_sided);
        assert_eq!(Material::for_box().roughness, 0.5);
        assert_eq!(Material::for_cylinder().color, "#4caf50");
    }

    #[test]
    fn test_paper_is_double_sided() {
        let paper = Material::paper("#f44336");
        assert!(paper.double_sided);
        assert!(paper.flat_shading);
        assert_eq!(paper.metalness, 0.0);
    }

    #[test]
    fn test_material_serializes_camel_case() {
        let value = serde_json::to_value(Material::paper("#ffffff")).unwrap();
        assert_eq!(value["doubleSided"], true);
        assert_eq!(value["flatShading"], true);
    }
}
