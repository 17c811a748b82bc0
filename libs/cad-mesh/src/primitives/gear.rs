//! # Gear Primitive
//!
//! A spur gear is built in two steps:
//!
//! 1. [`gear_profile`] walks the rim in `2 * teeth` half-steps, alternating a
//!    root point on the pitch circle with a tip point pushed out by the tooth
//!    depth. Consecutive root/tip/root points give each tooth a trapezoidal
//!    silhouette.
//! 2. [`extrude_annulus`] extrudes the region between that outline and a bore
//!    circle sampled at the same angles, giving a closed solid with an outer
//!    wall, a bore wall and two ring-shaped caps.
//!
//! The solid is centered on the origin with its axis along Z.

use std::f64::consts::TAU;

use glam::DVec2;

use config::constants::{MAX_GEAR_TEETH, MIN_GEAR_TEETH};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Builds the closed, counter-clockwise outer outline of a gear.
///
/// Point `k` sits at angle `k * π / teeth`; even points lie on
/// `root_radius`, odd points on `root_radius + tooth_depth`.
pub fn gear_profile(teeth: u32, root_radius: f64, tooth_depth: f64) -> Vec<DVec2> {
    let points = 2 * teeth;
    (0..points)
        .map(|k| {
            let angle = TAU * k as f64 / points as f64;
            let radius = if k % 2 == 0 {
                root_radius
            } else {
                root_radius + tooth_depth
            };
            DVec2::from_angle(angle) * radius
        })
        .collect()
}

/// Extrudes the ring between `outline` and a concentric bore circle.
///
/// The bore circle is sampled at the angles of the outline points, so every
/// outline point pairs with one bore point.
///
/// # Arguments
///
/// * `outline` - Closed counter-clockwise outline around the origin
/// * `bore_radius` - Radius of the center hole, inside the outline
/// * `thickness` - Extrusion depth, split evenly around z = 0
///
/// # Returns
///
/// A mesh with `4 * n` vertices and `8 * n` triangles for an outline of
/// `n` points.
pub fn extrude_annulus(outline: &[DVec2], bore_radius: f64, thickness: f64) -> Result<Mesh, MeshError> {
    if outline.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "Outline needs at least 3 points, got {}",
            outline.len()
        )));
    }
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Extrusion thickness must be positive: {thickness}"
        )));
    }
    let inner_limit = outline
        .iter()
        .map(|p| p.length())
        .fold(f64::INFINITY, f64::min);
    if !(bore_radius > 0.0 && bore_radius < inner_limit) {
        return Err(MeshError::degenerate(format!(
            "Bore radius {bore_radius} must be positive and inside the outline ({inner_limit})"
        )));
    }

    let n = outline.len();
    let mut mesh = Mesh::with_capacity(4 * n, 8 * n)?;
    let half = thickness / 2.0;

    let bore: Vec<DVec2> = outline
        .iter()
        .map(|p| p.normalize() * bore_radius)
        .collect();

    let mut layer = |ring: &[DVec2], z: f64| -> Vec<u32> {
        ring.iter()
            .map(|p| mesh.add_vertex(p.extend(z)))
            .collect()
    };
    let outer_bottom = layer(outline, -half);
    let outer_top = layer(outline, half);
    let inner_bottom = layer(&bore, -half);
    let inner_top = layer(&bore, half);

    for i in 0..n {
        let j = (i + 1) % n;

        // Outer wall faces away from the axis, bore wall towards it
        mesh.add_quad(outer_bottom[i], outer_bottom[j], outer_top[j], outer_top[i]);
        mesh.add_quad(inner_bottom[i], inner_top[i], inner_top[j], inner_bottom[j]);

        // Top cap faces +Z, bottom cap -Z
        mesh.add_quad(outer_top[i], outer_top[j], inner_top[j], inner_top[i]);
        mesh.add_quad(outer_bottom[i], inner_bottom[i], inner_bottom[j], outer_bottom[j]);
    }

    Ok(mesh)
}

/// Creates a spur gear centered on the origin with its axis along Z.
///
/// # Arguments
///
/// * `teeth` - Number of teeth, within the configured tooth limits
/// * `diameter` - Pitch diameter; tips reach `diameter / 2 + tooth_depth`
/// * `tooth_depth` - Radial height of each tooth
/// * `bore_radius` - Radius of the center hole
/// * `thickness` - Extrusion depth
///
/// # Example
///
/// ```rust
/// use cad_mesh::primitives::create_gear;
///
/// let mesh = create_gear(12, 1.0, 0.1, 1.0 / 6.0, 0.2).unwrap();
/// assert_eq!(mesh.vertex_count(), 96);
/// assert_eq!(mesh.triangle_count(), 192);
/// ```
pub fn create_gear(
    teeth: u32,
    diameter: f64,
    tooth_depth: f64,
    bore_radius: f64,
    thickness: f64,
) -> Result<Mesh, MeshError> {
    if !(MIN_GEAR_TEETH..=MAX_GEAR_TEETH).contains(&teeth) {
        return Err(MeshError::degenerate(format!(
            "Gear teeth must be within {MIN_GEAR_TEETH}..={MAX_GEAR_TEETH}: {teeth}"
        )));
    }
    if !(diameter.is_finite() && diameter > 0.0) || !(tooth_depth.is_finite() && tooth_depth >= 0.0) {
        return Err(MeshError::degenerate(format!(
            "Gear diameter {diameter} must be positive and tooth depth {tooth_depth} non-negative"
        )));
    }

    let outline = gear_profile(teeth, diameter / 2.0, tooth_depth);
    extrude_annulus(&outline, bore_radius, thickness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_alternates_root_and_tip() {
        let profile = gear_profile(4, 1.0, 0.25);
        assert_eq!(profile.len(), 8);
        assert_relative_eq!(profile[0].x, 1.0);
        assert_relative_eq!(profile[0].y, 0.0);
        assert_relative_eq!(profile[1].length(), 1.25);
        assert_relative_eq!(profile[1].x, profile[1].y, epsilon = 1e-12);
        assert_relative_eq!(profile[2].length(), 1.0);
    }

    #[test]
    fn test_gear_counts() {
        for teeth in [3, 12, 20, 360] {
            let mesh = create_gear(teeth, 1.0, 0.1, 1.0 / 6.0, 0.2).unwrap();
            assert_eq!(mesh.vertex_count(), 8 * teeth as usize);
            assert_eq!(mesh.triangle_count(), 16 * teeth as usize);
        }
    }

    #[test]
    fn test_gear_is_closed_and_outward() {
        let mesh = create_gear(12, 1.0, 0.1, 1.0 / 6.0, 0.2).unwrap();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_watertight());
        assert!(mesh.is_consistently_oriented());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_gear_extent() {
        let (min, max) = create_gear(12, 1.0, 0.1, 1.0 / 6.0, 0.2)
            .unwrap()
            .bounding_box();
        assert_relative_eq!(min.z, -0.1);
        assert_relative_eq!(max.z, 0.1);
        assert!(max.x <= 0.6 + 1e-12);
        assert!(max.x >= 0.5);
    }

    #[test]
    fn test_bore_must_fit_inside_outline() {
        assert!(create_gear(12, 1.0, 0.1, 0.5, 0.2).is_err());
        assert!(create_gear(12, 1.0, 0.1, 0.0, 0.2).is_err());
    }

    #[test]
    fn test_gear_invalid_inputs() {
        assert!(create_gear(2, 1.0, 0.1, 0.1, 0.2).is_err());
        assert!(create_gear(u32::MAX, 1.0, 0.1, 0.1, 0.2).is_err());
        assert!(create_gear(12, -1.0, 0.1, 0.1, 0.2).is_err());
        assert!(create_gear(12, 1.0, 0.1, 0.1, 0.0).is_err());
        assert!(extrude_annulus(&[DVec2::X, DVec2::Y], 0.1, 1.0).is_err());
    }
}
