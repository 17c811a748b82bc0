//! # Paper Airplane Builder
//!
//! Picks the outline by fold pattern and colors it with the paper color.
//! The surface is open, so its material renders both faces.

use cad_parse::{PaperAirplaneParameters, Parameters, PAPER_AIRPLANE_FAMILY};
use config::display::DisplayConfig;
use tracing::debug;

use crate::builder::{finish, ShapeBuilder};
use crate::error::MeshError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::primitives::create_paper_airplane;

/// Builder for the `paperAirplane` family.
#[derive(Debug, Clone, Default)]
pub struct PaperAirplaneBuilder {
    display: DisplayConfig,
}

impl PaperAirplaneBuilder {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl ShapeBuilder for PaperAirplaneBuilder {
    fn family(&self) -> &str {
        PAPER_AIRPLANE_FAMILY
    }

    fn build(&self, parameters: &Parameters) -> Result<Mesh, MeshError> {
        let params = PaperAirplaneParameters::from_parameters(parameters);
        debug!(kind = params.kind.as_str(), "selecting airplane outline");
        let mesh = create_paper_airplane(
            params.kind,
            self.display.normalize(params.wingspan),
            self.display.normalize(params.length),
        )?;
        finish(PAPER_AIRPLANE_FAMILY, mesh)
    }

    fn material(&self, parameters: &Parameters) -> Material {
        Material::paper(PaperAirplaneParameters::from_parameters(parameters).paper_color)
    }
}
