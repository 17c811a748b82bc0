//! # Box Builder
//!
//! Width along X, height along Y, depth along Z, centered. The rounded
//! variant keeps the prism and only subdivides its faces.

use cad_parse::{BoxParameters, Parameters, BOX_FAMILY};
use config::display::DisplayConfig;
use glam::DVec3;

use crate::builder::{finish, ShapeBuilder};
use crate::error::MeshError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::primitives::create_cuboid;

/// Builder for the `box` family.
#[derive(Debug, Clone, Default)]
pub struct BoxBuilder {
    display: DisplayConfig,
}

impl BoxBuilder {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl ShapeBuilder for BoxBuilder {
    fn family(&self) -> &str {
        BOX_FAMILY
    }

    fn build(&self, parameters: &Parameters) -> Result<Mesh, MeshError> {
        let params = BoxParameters::from_parameters(parameters);
        let size = DVec3::new(
            self.display.normalize(params.width),
            self.display.normalize(params.height),
            self.display.normalize(params.depth),
        );
        let subdivisions = if params.rounded {
            self.display.rounded_subdivisions
        } else {
            1
        };
        finish(BOX_FAMILY, create_cuboid(size, subdivisions)?)
    }

    fn material(&self, _parameters: &Parameters) -> Material {
        Material::for_box()
    }
}
