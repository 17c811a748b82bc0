//! # Cylinder Builder
//!
//! Builds along Z, then turns the axis to Y for display.

use cad_parse::{CylinderParameters, Parameters, CYLINDER_FAMILY};
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use config::display::DisplayConfig;

use crate::builder::{finish, z_to_y_up, ShapeBuilder};
use crate::error::MeshError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::primitives::create_cylinder;

/// Builder for the `cylinder` family.
#[derive(Debug, Clone, Default)]
pub struct CylinderBuilder {
    display: DisplayConfig,
}

impl CylinderBuilder {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl ShapeBuilder for CylinderBuilder {
    fn family(&self) -> &str {
        CYLINDER_FAMILY
    }

    fn build(&self, parameters: &Parameters) -> Result<Mesh, MeshError> {
        let params = CylinderParameters::from_parameters(parameters);
        let mut mesh = create_cylinder(
            self.display.normalize(params.radius),
            self.display.normalize(params.height),
            params.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS),
        )?;
        mesh.transform(&z_to_y_up());
        finish(CYLINDER_FAMILY, mesh)
    }

    fn material(&self, _parameters: &Parameters) -> Material {
        Material::for_cylinder()
    }
}
