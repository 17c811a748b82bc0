//! # Cuboid Primitive
//!
//! Generates a centered rectangular prism whose faces are split into an
//! `n × n` grid. Grid points on shared edges and corners are emitted once,
//! so every subdivision level stays watertight.

use std::collections::HashMap;

use config::constants::MAX_MESH_VERTICES;
use glam::{DVec3, UVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a centered box mesh with `subdivisions` grid cells per face edge.
///
/// # Arguments
///
/// * `size` - Extents along X, Y and Z
/// * `subdivisions` - Grid cells per face edge (1 gives the plain 8-vertex box)
///
/// # Returns
///
/// A mesh with `(n+1)³ - (n-1)³` vertices and `12n²` triangles.
///
/// # Example
///
/// ```rust
/// use cad_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::splat(1.0), 1).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(size: DVec3, subdivisions: u32) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {size:?}"
        )));
    }
    if subdivisions == 0 {
        return Err(MeshError::degenerate("Box needs at least one subdivision"));
    }

    let n = subdivisions as usize;
    let vertex_count = (n + 1)
        .checked_pow(3)
        .map(|outer| outer - (n - 1).pow(3))
        .ok_or(MeshError::TooManyVertices {
            count: usize::MAX,
            max: MAX_MESH_VERTICES,
        })?;
    let mut mesh = Mesh::with_capacity(vertex_count, 12 * n * n)?;

    let half = size / 2.0;
    let step = size / subdivisions as f64;
    let mut lattice: HashMap<UVec3, u32> = HashMap::with_capacity(vertex_count);
    let mut point = |mesh: &mut Mesh, cell: UVec3| -> u32 {
        *lattice
            .entry(cell)
            .or_insert_with(|| mesh.add_vertex(cell.as_dvec3() * step - half))
    };

    for axis in 0..3 {
        // (a, b, axis) is a right-handed frame, so a × b points along +axis
        let a = (axis + 1) % 3;
        let b = (axis + 2) % 3;

        for (side, outward) in [(0, false), (subdivisions, true)] {
            for u in 0..subdivisions {
                for v in 0..subdivisions {
                    let corner = |du: u32, dv: u32| {
                        let mut cell = UVec3::ZERO;
                        cell[axis] = side;
                        cell[a] = u + du;
                        cell[b] = v + dv;
                        cell
                    };
                    let p00 = point(&mut mesh, corner(0, 0));
                    let p10 = point(&mut mesh, corner(1, 0));
                    let p11 = point(&mut mesh, corner(1, 1));
                    let p01 = point(&mut mesh, corner(0, 1));

                    if outward {
                        mesh.add_quad(p00, p10, p11, p01);
                    } else {
                        mesh.add_quad(p00, p01, p11, p10);
                    }
                }
            }
        }
    }

    Ok(mesh)
}
