//! # Mesh Data Structure
//!
//! Triangle mesh with derived vertex normals, topology checks, and export to
//! flat GPU buffers.

use std::collections::HashMap;

use config::constants::{DEGENERATE_AREA_EPSILON, MAX_MESH_VERTICES};
use glam::{DMat4, DVec3};
use serde::Serialize;

use crate::error::MeshError;

/// A triangle mesh with vertices, indices and derived normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the buffer boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use cad_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle, counter-clockwise = front)
    triangles: Vec<[u32; 3]>,
    /// Vertex normals, derived by `compute_normals`
    normals: Option<Vec<DVec3>>,
}

/// Flattened mesh data ready for upload to a GPU viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffers {
    /// `[x, y, z, x, y, z, ...]`
    pub positions: Vec<f32>,
    /// `[i0, i1, i2, i0, i1, i2, ...]`
    pub indices: Vec<u32>,
    /// `[nx, ny, nz, ...]`, empty if normals were never computed
    pub normals: Vec<f32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    ///
    /// Fails if `vertex_count` exceeds the per-mesh vertex limit.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Result<Self, MeshError> {
        if vertex_count > MAX_MESH_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: MAX_MESH_VERTICES,
            });
        }
        Ok(Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        })
    }

    /// Builds a mesh from explicit vertex and index tables.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds the quad `a b c d` (counter-clockwise) as two triangles.
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle topology.
    ///
    /// Must run after the last change to positions or indices; builders call
    /// it as their final step. Triangles with out-of-range indices are
    /// skipped.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let Some([v0, v1, v2]) = self.corners(tri) else {
                continue;
            };

            // Unnormalized cross product weights by area
            let normal = (v1 - v0).cross(v2 - v0);

            for &index in tri {
                normals[index as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Normals are transformed by the inverse transpose when present.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
    }

    /// Returns true if every index references an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles
            .iter()
            .flatten()
            .all(|&index| (index as usize) < vertex_count)
    }

    /// Validates the mesh.
    ///
    /// Checks:
    /// - All triangle indices are in bounds
    /// - No triangle repeats a vertex
    /// - No triangle has zero area
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.indices_in_bounds() {
            return Err(MeshError::invalid_topology(format!(
                "triangle index out of bounds for {} vertices",
                self.vertices.len()
            )));
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {i} repeats a vertex: {tri:?}"
                )));
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            if (v1 - v0).cross(v2 - v0).length() < DEGENERATE_AREA_EPSILON {
                return Err(MeshError::degenerate(format!("triangle {i} has zero area")));
            }
        }

        Ok(())
    }

    /// Counts how often each undirected edge is traversed in each direction.
    ///
    /// Keys are `(low, high)` vertex pairs; values are
    /// `(low → high count, high → low count)`.
    fn edge_uses(&self) -> HashMap<(u32, u32), (u32, u32)> {
        let mut uses: HashMap<(u32, u32), (u32, u32)> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                let entry = uses.entry((a.min(b), a.max(b))).or_default();
                if a < b {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }
        uses
    }

    /// Returns true if every edge is shared by exactly two triangles.
    pub fn is_watertight(&self) -> bool {
        !self.triangles.is_empty()
            && self
                .edge_uses()
                .values()
                .all(|(forward, backward)| forward + backward == 2)
    }

    /// Returns true if every edge is traversed once in each direction, i.e.
    /// the mesh is closed and neighboring triangles agree on winding.
    pub fn is_consistently_oriented(&self) -> bool {
        !self.triangles.is_empty() && self.edge_uses().values().all(|&uses| uses == (1, 1))
    }

    /// Signed enclosed volume. Positive for closed meshes wound outward.
    /// Triangles with out-of-range indices contribute nothing.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .filter_map(|tri| self.corners(tri))
            .map(|[v0, v1, v2]| v0.dot(v1.cross(v2)))
            .sum::<f64>()
            / 6.0
    }

    /// Corner positions of a triangle, or `None` if an index is out of range.
    fn corners(&self, tri: &[u32; 3]) -> Option<[DVec3; 3]> {
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }

    /// Exports vertices as a flattened f32 array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as a flattened u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as a flattened f32 array.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Exports all buffers for a GPU viewer.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: self.vertices_f32(),
            indices: self.indices_u32(),
            normals: self.normals_f32().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit tetrahedron wound outward.
    fn tetrahedron() -> Mesh {
        Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_none());
    }

    #[test]
    fn test_mesh_with_capacity_limit() {
        assert!(Mesh::with_capacity(8, 12).is_ok());
        assert!(matches!(
            Mesh::with_capacity(MAX_MESH_VERTICES + 1, 0),
            Err(MeshError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_mesh_add_quad() {
        let mut mesh = Mesh::new();
        for v in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
            mesh.add_vertex(v);
        }
        mesh.add_quad(0, 1, 2, 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.indices_in_bounds());
        assert!(matches!(mesh.validate(), Err(MeshError::InvalidTopology { .. })));
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0],
            vec![[0, 1, 2]],
        );
        assert!(matches!(mesh.validate(), Err(MeshError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_compute_normals_single_triangle() {
        let mut mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert!(n.abs_diff_eq(DVec3::Z, 1e-12));
        }
    }

    #[test]
    fn test_tetrahedron_topology() {
        let mesh = tetrahedron();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_watertight());
        assert!(mesh.is_consistently_oriented());
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flipped_triangle_breaks_orientation_only() {
        let mut mesh = tetrahedron();
        mesh.triangles[3] = [1, 3, 2];
        assert!(mesh.is_watertight());
        assert!(!mesh.is_consistently_oriented());
    }

    #[test]
    fn test_open_surface_is_not_watertight() {
        let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        assert!(!mesh.is_watertight());
        assert!(!Mesh::new().is_watertight());
    }

    #[test]
    fn test_transform_keeps_normals_unit() {
        let mut mesh = tetrahedron();
        mesh.compute_normals();
        mesh.transform(&DMat4::from_scale(DVec3::new(2.0, 1.0, 1.0)));
        assert_eq!(mesh.vertices()[1], DVec3::new(2.0, 0.0, 0.0));
        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mesh_buffers() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::new(1.0, 2.0, 3.0), DVec3::X, DVec3::Y],
            vec![[0, 1, 2]],
        );
        let buffers = mesh.to_buffers();
        assert_eq!(&buffers.positions[..3], &[1.0f32, 2.0, 3.0]);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert!(buffers.normals.is_empty());

        mesh.compute_normals();
        assert_eq!(mesh.to_buffers().normals.len(), 9);
    }

    #[test]
    fn test_out_of_range_indices_are_skipped() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 1, 2], [0, 1, 9]],
        );
        assert!(!mesh.indices_in_bounds());
        assert_relative_eq!(mesh.signed_volume(), 0.0);

        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert!(normals[0].abs_diff_eq(DVec3::Z, 1e-12));
        assert_eq!(normals[3], DVec3::ZERO);
    }
}
