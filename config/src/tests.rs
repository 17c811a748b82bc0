//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the
//! validated display snapshot.

use crate::constants::*;
use crate::display::{ConfigError, DisplayConfig};

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_degenerate_area_tolerance_is_small_and_positive() {
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
    assert!(DEGENERATE_AREA_EPSILON < 1e-6);
}

// =============================================================================
// SCALING TESTS
// =============================================================================

#[test]
fn test_reference_length_is_fifty_millimeters() {
    assert_eq!(REFERENCE_LENGTH_MM, 50.0);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_family_defaults_are_positive() {
    for value in [
        DEFAULT_BOX_SIZE_MM,
        DEFAULT_CYLINDER_RADIUS_MM,
        DEFAULT_CYLINDER_HEIGHT_MM,
        DEFAULT_GEAR_DIAMETER_MM,
        DEFAULT_GEAR_THICKNESS_MM,
        DEFAULT_WINGSPAN_MM,
        DEFAULT_AIRPLANE_LENGTH_MM,
    ] {
        assert!(value > 0.0);
    }
}

#[test]
fn test_default_gear_teeth_within_limits() {
    assert!(DEFAULT_GEAR_TEETH >= MIN_GEAR_TEETH);
    assert!(DEFAULT_GEAR_TEETH <= MAX_GEAR_TEETH);
}

#[test]
fn test_gear_bore_inside_tooth_root() {
    // Root radius is diameter / 2, the bore must stay strictly inside it
    assert!(GEAR_BORE_RATIO > 2.0);
}

#[test]
fn test_segment_limits() {
    assert!(MIN_SEGMENTS >= 3);
    assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
    assert!(DEFAULT_SEGMENTS <= MAX_SEGMENTS);
}

#[test]
fn test_default_paper_color_is_hex() {
    assert!(DEFAULT_PAPER_COLOR.starts_with('#'));
    assert_eq!(DEFAULT_PAPER_COLOR.len(), 7);
}

// =============================================================================
// DISPLAY CONFIG TESTS
// =============================================================================

#[test]
fn test_display_config_default() {
    let cfg = DisplayConfig::default();
    assert_eq!(cfg.reference_length, REFERENCE_LENGTH_MM);
    assert_eq!(cfg.rounded_subdivisions, ROUNDED_BOX_SUBDIVISIONS);
    assert_eq!(cfg.normalize(100.0), 2.0);
}

#[test]
fn test_display_config_validates_inputs() {
    assert_eq!(
        DisplayConfig::new(0.0, 4).unwrap_err(),
        ConfigError::InvalidReferenceLength(0.0)
    );
    assert!(DisplayConfig::new(f64::NAN, 4).is_err());
    assert_eq!(
        DisplayConfig::new(50.0, 0).unwrap_err(),
        ConfigError::InvalidSubdivisions(0)
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidSubdivisions(0);
    assert!(err.to_string().contains("subdivisions"));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_mesh_vertex_limit_fits_u32_indices() {
    assert!(MAX_MESH_VERTICES > 0);
    assert!(MAX_MESH_VERTICES <= u32::MAX as usize);
}
