//! # Configuration Constants
//!
//! Centralized constants for the text-to-shape pipeline. Default dimensions,
//! tessellation parameters, display scaling and precision values live here.
//!
//! ## Categories
//!
//! - **Precision**: Degenerate-geometry tolerance
//! - **Scaling**: Millimeter to display-unit normalization
//! - **Resolution**: Radial segments and box subdivision
//! - **Defaults**: Per-family fallback dimensions (millimeters)
//! - **Limits**: Safety bounds on procedural inputs

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum triangle area (as cross-product length) below which a triangle is
/// treated as degenerate during mesh validation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// // Right triangle with 1e-7 legs: cross-product length is their product
/// let sliver = 1e-7 * 1e-7;
/// assert!(sliver < DEGENERATE_AREA_EPSILON);
/// assert!(DEGENERATE_AREA_EPSILON > 0.0);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Reference length in millimeters that maps to one display unit.
///
/// Every shape family divides its millimeter dimensions by this value, so a
/// 50mm feature is one unit tall on screen regardless of family.
///
/// # Example
///
/// ```rust
/// use config::constants::REFERENCE_LENGTH_MM;
///
/// let normalized = 100.0 / REFERENCE_LENGTH_MM;
/// assert_eq!(normalized, 2.0);
/// ```
pub const REFERENCE_LENGTH_MM: f64 = 50.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Radial segment count for cylinders.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let requested: Option<u32> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_SEGMENTS), 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Fewest segments that still close a circular cross-section.
pub const MIN_SEGMENTS: u32 = 3;

/// Most radial segments a cylinder is allowed to request.
pub const MAX_SEGMENTS: u32 = 1024;

/// Subdivisions per axis used for the "rounded" box variant.
///
/// The rounded box keeps the prism topology and only raises its resolution.
pub const ROUNDED_BOX_SUBDIVISIONS: u32 = 4;

// =============================================================================
// FAMILY DEFAULTS (millimeters)
// =============================================================================

/// Box width, height and depth when the text names none.
pub const DEFAULT_BOX_SIZE_MM: f64 = 50.0;

/// Cylinder radius when neither radius nor diameter is given.
pub const DEFAULT_CYLINDER_RADIUS_MM: f64 = 25.0;

/// Cylinder height when neither height nor length is given.
pub const DEFAULT_CYLINDER_HEIGHT_MM: f64 = 100.0;

/// Tooth count for gears without an explicit `<N> teeth`.
pub const DEFAULT_GEAR_TEETH: u32 = 12;

/// Gear outer diameter.
pub const DEFAULT_GEAR_DIAMETER_MM: f64 = 50.0;

/// Gear extrusion thickness.
pub const DEFAULT_GEAR_THICKNESS_MM: f64 = 10.0;

/// Paper airplane wingspan.
pub const DEFAULT_WINGSPAN_MM: f64 = 200.0;

/// Paper airplane nose-to-tail length.
pub const DEFAULT_AIRPLANE_LENGTH_MM: f64 = 250.0;

/// Paper color used when no color bucket matches.
pub const DEFAULT_PAPER_COLOR: &str = "#ffffff";

/// Family name reported when nothing in the text is recognized.
pub const UNKNOWN_FAMILY: &str = "unknown";

// =============================================================================
// GEAR PROFILE RATIOS
// =============================================================================

/// Bore radius is the normalized diameter divided by this ratio.
pub const GEAR_BORE_RATIO: f64 = 6.0;

/// Tooth depth is the normalized diameter divided by this ratio.
pub const GEAR_TOOTH_DEPTH_RATIO: f64 = 10.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Fewest teeth a gear profile is built with.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_GEAR_TEETH, MAX_GEAR_TEETH};
///
/// let requested = 1u32;
/// assert_eq!(requested.clamp(MIN_GEAR_TEETH, MAX_GEAR_TEETH), 3);
/// ```
pub const MIN_GEAR_TEETH: u32 = 3;

/// Most teeth a gear profile is built with.
pub const MAX_GEAR_TEETH: u32 = 360;

/// Upper bound on vertices in a single generated mesh.
pub const MAX_MESH_VERTICES: usize = 4_000_000;
