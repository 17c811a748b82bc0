//! # Shape Builder
//!
//! The contract that turns one family's parameters into a display-ready
//! mesh and material.

use std::f64::consts::FRAC_PI_2;

use cad_parse::Parameters;
use glam::DMat4;
use tracing::info;

use crate::error::MeshError;
use crate::material::Material;
use crate::mesh::Mesh;

/// Builds meshes for one shape family.
///
/// Builders are stateless after construction and read their parameters
/// through the family's `from_parameters`, so a missing or mismatched
/// variant falls back to the family defaults instead of failing. An `Err`
/// means the generated geometry itself was unusable.
pub trait ShapeBuilder: Send + Sync {
    /// Family name this builder is registered under.
    fn family(&self) -> &str;

    /// Builds the mesh in display units, Y up, with normals computed.
    fn build(&self, parameters: &Parameters) -> Result<Mesh, MeshError>;

    /// Display material for the given parameters.
    fn material(&self, parameters: &Parameters) -> Material;
}

/// Rotation taking a Z-axis solid into the Y-up display frame.
pub fn z_to_y_up() -> DMat4 {
    DMat4::from_rotation_x(-FRAC_PI_2)
}

/// Validates a finished mesh and derives its normals.
pub(crate) fn finish(family: &str, mut mesh: Mesh) -> Result<Mesh, MeshError> {
    mesh.validate()?;
    mesh.compute_normals();
    info!(
        family,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built mesh"
    );
    Ok(mesh)
}
