//! # Gear Builder
//!
//! Scales the gear profile from the diameter: tooth depth is a tenth of the
//! diameter and the bore radius a sixth. The gear lies flat with its axis
//! along Y.

use cad_parse::{GearParameters, Parameters, GEAR_FAMILY};
use config::constants::{GEAR_BORE_RATIO, GEAR_TOOTH_DEPTH_RATIO, MAX_GEAR_TEETH, MIN_GEAR_TEETH};
use config::display::DisplayConfig;

use crate::builder::{finish, z_to_y_up, ShapeBuilder};
use crate::error::MeshError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::primitives::create_gear;

/// Builder for the `gear` family.
#[derive(Debug, Clone, Default)]
pub struct GearBuilder {
    display: DisplayConfig,
}

impl GearBuilder {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl ShapeBuilder for GearBuilder {
    fn family(&self) -> &str {
        GEAR_FAMILY
    }

    fn build(&self, parameters: &Parameters) -> Result<Mesh, MeshError> {
        let params = GearParameters::from_parameters(parameters);
        let diameter = self.display.normalize(params.diameter);
        let mut mesh = create_gear(
            params.teeth_count.clamp(MIN_GEAR_TEETH, MAX_GEAR_TEETH),
            diameter,
            diameter / GEAR_TOOTH_DEPTH_RATIO,
            diameter / GEAR_BORE_RATIO,
            self.display.normalize(params.thickness),
        )?;
        mesh.transform(&z_to_y_up());
        finish(GEAR_FAMILY, mesh)
    }

    fn material(&self, _parameters: &Parameters) -> Material {
        Material::for_gear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn build(teeth_count: u32) -> Mesh {
        GearBuilder::default()
            .build(&Parameters::Gear(GearParameters {
                teeth_count,
                ..GearParameters::default()
            }))
            .unwrap()
    }

    #[test]
    fn test_default_gear() {
        let mesh = GearBuilder::default().build(&Parameters::Empty).unwrap();
        assert_eq!(mesh.vertex_count(), 96);
        assert_eq!(mesh.triangle_count(), 192);
        assert!(mesh.is_watertight());
        assert!(mesh.is_consistently_oriented());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_gear_lies_flat() {
        let (min, max) = GearBuilder::default()
            .build(&Parameters::Empty)
            .unwrap()
            .bounding_box();
        // 10mm thick, 50mm diameter plus 5mm teeth
        assert_relative_eq!(max.y - min.y, 0.2, epsilon = 1e-12);
        assert!(max.x > 0.5 && max.x <= 0.6 + 1e-12);
    }

    #[test]
    fn test_teeth_are_clamped() {
        assert_eq!(build(1).triangle_count(), 16 * 3);
        assert_eq!(build(100_000).triangle_count(), 16 * 360);
        assert_eq!(build(20).triangle_count(), 16 * 20);
    }

    #[test]
    fn test_gear_material() {
        let material = GearBuilder::default().material(&Parameters::Empty);
        assert_eq!(material.color, "#1976d2");
        assert_eq!(material.roughness, 0.3);
    }
}
