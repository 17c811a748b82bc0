//! # Cylinder Primitive
//!
//! Generates a closed right circular cylinder centered on the origin with
//! its axis along Z.

use std::f64::consts::TAU;

use glam::DVec3;

use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Distance between the caps, split evenly around z = 0
/// * `segments` - Number of segments around circumference
///
/// # Returns
///
/// A mesh with `2 * segments` vertices and `4 * segments - 4` triangles
/// (side quads plus fan-triangulated caps).
///
/// # Example
///
/// ```rust
/// use cad_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(0.5, 2.0, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.triangle_count(), 124);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(height.is_finite() && height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }

    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {segments}"
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4)?;
    let half = height / 2.0;

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };
    let bottom = ring(&mut mesh, -half);
    let top = ring(&mut mesh, half);

    // Side wall
    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_quad(bottom[j], bottom[next], top[next], top[j]);
    }

    // Caps, fanned from the first rim vertex
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}
