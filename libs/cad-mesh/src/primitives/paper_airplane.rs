//! # Paper Airplane Primitive
//!
//! Four folded-paper outlines. Each is a fixed set of control points scaled
//! by wingspan and length, triangulated by a fixed index table. The nose
//! points along +X, the wings spread along Z and the center fold is raised
//! along +Y, so the surface is a shallow open tent rather than a solid.

use cad_parse::AirplaneKind;
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Dart and delta: three panels per wing meeting at the fold point (6).
const SIX_PANEL: [[u32; 3]; 6] = [
    [0, 1, 6],
    [1, 2, 6],
    [2, 3, 6],
    [0, 6, 5],
    [5, 6, 4],
    [4, 6, 3],
];

/// Glider and stunt: five panels per wing meeting at the fold point (10).
const TEN_PANEL: [[u32; 3]; 10] = [
    [0, 1, 10],
    [1, 2, 10],
    [2, 3, 10],
    [3, 4, 10],
    [4, 5, 10],
    [0, 10, 9],
    [9, 10, 8],
    [8, 10, 7],
    [7, 10, 6],
    [6, 10, 5],
];

/// Control points of one outline, nose first.
fn control_points(kind: AirplaneKind, w: f64, l: f64) -> Vec<DVec3> {
    let half = w / 2.0;
    match kind {
        AirplaneKind::Dart => vec![
            DVec3::new(l / 2.0, 0.0, 0.0),
            DVec3::new(-l / 6.0, 0.0, half),
            DVec3::new(-l / 2.0, 0.0, w / 4.0),
            DVec3::new(-l / 2.0, 0.0, 0.0),
            DVec3::new(-l / 2.0, 0.0, -w / 4.0),
            DVec3::new(-l / 6.0, 0.0, -half),
            DVec3::new(0.0, w / 10.0, 0.0),
        ],
        AirplaneKind::Delta => vec![
            DVec3::new(l / 2.0, 0.0, 0.0),
            DVec3::new(-l / 5.0, 0.0, half),
            DVec3::new(-l / 2.0, 0.0, w / 8.0),
            DVec3::new(-l / 2.0, 0.0, 0.0),
            DVec3::new(-l / 2.0, 0.0, -w / 8.0),
            DVec3::new(-l / 5.0, 0.0, -half),
            DVec3::new(0.0, w / 15.0, 0.0),
        ],
        AirplaneKind::Glider => vec![
            DVec3::new(l / 2.0, 0.0, 0.0),
            DVec3::new(l / 4.0, 0.0, half / 2.0),
            DVec3::new(0.0, 0.0, half),
            DVec3::new(-l / 4.0, 0.0, half / 2.0),
            DVec3::new(-l / 2.0, 0.0, w / 6.0),
            DVec3::new(-l / 2.0, 0.0, 0.0),
            DVec3::new(-l / 2.0, 0.0, -w / 6.0),
            DVec3::new(-l / 4.0, 0.0, -half / 2.0),
            DVec3::new(0.0, 0.0, -half),
            DVec3::new(l / 4.0, 0.0, -half / 2.0),
            DVec3::new(0.0, w / 12.0, 0.0),
        ],
        // Raised nose and wingtips, lowered tail
        AirplaneKind::Stunt => vec![
            DVec3::new(l / 2.0, w / 20.0, 0.0),
            DVec3::new(l / 6.0, 0.0, half / 2.0),
            DVec3::new(-l / 8.0, w / 30.0, half),
            DVec3::new(-l / 3.0, 0.0, half / 2.0),
            DVec3::new(-l / 2.0, 0.0, w / 5.0),
            DVec3::new(-l / 2.0, -w / 30.0, 0.0),
            DVec3::new(-l / 2.0, 0.0, -w / 5.0),
            DVec3::new(-l / 3.0, 0.0, -half / 2.0),
            DVec3::new(-l / 8.0, w / 30.0, -half),
            DVec3::new(l / 6.0, 0.0, -half / 2.0),
            DVec3::new(0.0, w / 10.0, 0.0),
        ],
    }
}

/// Triangle table of one outline.
pub fn panel_table(kind: AirplaneKind) -> &'static [[u32; 3]] {
    match kind {
        AirplaneKind::Dart | AirplaneKind::Delta => &SIX_PANEL,
        AirplaneKind::Glider | AirplaneKind::Stunt => &TEN_PANEL,
    }
}

/// Creates an open paper airplane surface.
///
/// # Arguments
///
/// * `kind` - Fold pattern
/// * `wingspan` - Tip-to-tip extent along Z
/// * `length` - Nose-to-tail extent along X
///
/// # Example
///
/// ```rust
/// use cad_mesh::primitives::create_paper_airplane;
/// use cad_parse::AirplaneKind;
///
/// let mesh = create_paper_airplane(AirplaneKind::Glider, 4.0, 5.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 11);
/// assert_eq!(mesh.triangle_count(), 10);
/// ```
pub fn create_paper_airplane(kind: AirplaneKind, wingspan: f64, length: f64) -> Result<Mesh, MeshError> {
    if !(wingspan.is_finite() && wingspan > 0.0 && length.is_finite() && length > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Airplane wingspan {wingspan} and length {length} must be positive"
        )));
    }

    Ok(Mesh::from_parts(
        control_points(kind, wingspan, length),
        panel_table(kind).to_vec(),
    ))
}
