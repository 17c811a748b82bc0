//! # Model Info
//!
//! The typed result of interpreting a text description: a family name and
//! the parameters that family understands.
//!
//! Each family owns a parameter struct whose `Default` is the documented
//! fallback for that family. Builders read parameters through
//! `from_parameters`, which falls back field by field when a value is
//! missing, zero, negative or not finite.

use config::constants::{
    DEFAULT_AIRPLANE_LENGTH_MM, DEFAULT_BOX_SIZE_MM, DEFAULT_CYLINDER_HEIGHT_MM,
    DEFAULT_CYLINDER_RADIUS_MM, DEFAULT_GEAR_DIAMETER_MM, DEFAULT_GEAR_TEETH,
    DEFAULT_GEAR_THICKNESS_MM, DEFAULT_PAPER_COLOR, DEFAULT_SEGMENTS, DEFAULT_WINGSPAN_MM,
    UNKNOWN_FAMILY,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Family name of the box classifier and builder.
pub const BOX_FAMILY: &str = "box";
/// Family name of the cylinder classifier and builder.
pub const CYLINDER_FAMILY: &str = "cylinder";
/// Family name of the gear classifier and builder.
pub const GEAR_FAMILY: &str = "gear";
/// Family name of the paper airplane classifier and builder.
pub const PAPER_AIRPLANE_FAMILY: &str = "paperAirplane";

/// A classified text: which family it describes and with what parameters.
///
/// # Example
///
/// ```rust
/// use cad_parse::{ModelInfo, Parameters};
///
/// let info = ModelInfo::unknown();
/// assert_eq!(info.family, "unknown");
/// assert_eq!(info.parameters, Parameters::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Free-form family handle (`gear`, `box`, `bracket`, `unknown`, ...)
    pub family: String,
    /// Parameters for the family, `Empty` when nothing was extracted
    pub parameters: Parameters,
}

impl ModelInfo {
    /// Creates model info for a family with the given parameters.
    pub fn new(family: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            family: family.into(),
            parameters,
        }
    }

    /// Creates model info for a family without parameters.
    pub fn bare(family: impl Into<String>) -> Self {
        Self::new(family, Parameters::Empty)
    }

    /// The result for text nothing recognized.
    pub fn unknown() -> Self {
        Self::bare(UNKNOWN_FAMILY)
    }

    /// Returns true if this is the `unknown` family.
    pub fn is_unknown(&self) -> bool {
        self.family == UNKNOWN_FAMILY
    }
}

/// Parameters carried by a [`ModelInfo`], one variant per family.
///
/// Serializes as a flat object keyed by parameter name, `{}` for `Empty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Parameters {
    /// Box dimensions
    Box(BoxParameters),
    /// Cylinder dimensions and tessellation
    Cylinder(CylinderParameters),
    /// Gear profile
    Gear(GearParameters),
    /// Paper airplane outline, variant and color
    PaperAirplane(PaperAirplaneParameters),
    /// No parameters (hinted families and bare keyword fallbacks)
    #[default]
    Empty,
}

impl Parameters {
    /// Returns true if no parameters were extracted.
    pub fn is_empty(&self) -> bool {
        matches!(self, Parameters::Empty)
    }
}

impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Parameters::Box(params) => params.serialize(serializer),
            Parameters::Cylinder(params) => params.serialize(serializer),
            Parameters::Gear(params) => params.serialize(serializer),
            Parameters::PaperAirplane(params) => params.serialize(serializer),
            Parameters::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Keeps a dimension only if it is a usable positive length.
fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

// =============================================================================
// BOX
// =============================================================================

/// Rectangular prism dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxParameters {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
    /// Selects the subdivided variant
    pub rounded: bool,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOX_SIZE_MM,
            height: DEFAULT_BOX_SIZE_MM,
            depth: DEFAULT_BOX_SIZE_MM,
            rounded: false,
        }
    }
}

impl BoxParameters {
    /// Reads box parameters, using defaults for anything absent or unusable.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        match parameters {
            Parameters::Box(params) => params.sanitized(),
            _ => Self::default(),
        }
    }

    /// Replaces unusable fields with their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            width: positive_or(self.width, defaults.width),
            height: positive_or(self.height, defaults.height),
            depth: positive_or(self.depth, defaults.depth),
            rounded: self.rounded,
        }
    }
}

// =============================================================================
// CYLINDER
// =============================================================================

/// Right circular cylinder in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CylinderParameters {
    /// Radius of both caps
    pub radius: f64,
    /// Distance between the caps
    pub height: f64,
    /// Radial segment count
    pub segments: u32,
}

impl Default for CylinderParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CYLINDER_RADIUS_MM,
            height: DEFAULT_CYLINDER_HEIGHT_MM,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl CylinderParameters {
    /// Reads cylinder parameters, using defaults for anything absent or unusable.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        match parameters {
            Parameters::Cylinder(params) => params.sanitized(),
            _ => Self::default(),
        }
    }

    /// Replaces unusable fields with their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            radius: positive_or(self.radius, defaults.radius),
            height: positive_or(self.height, defaults.height),
            segments: if self.segments == 0 {
                defaults.segments
            } else {
                self.segments
            },
        }
    }
}

// =============================================================================
// GEAR
// =============================================================================

/// Spur gear profile in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearParameters {
    /// Number of teeth around the rim
    pub teeth_count: u32,
    /// Root diameter of the toothed profile
    pub diameter: f64,
    /// Extrusion depth
    pub thickness: f64,
}

impl Default for GearParameters {
    fn default() -> Self {
        Self {
            teeth_count: DEFAULT_GEAR_TEETH,
            diameter: DEFAULT_GEAR_DIAMETER_MM,
            thickness: DEFAULT_GEAR_THICKNESS_MM,
        }
    }
}

impl GearParameters {
    /// Reads gear parameters, using defaults for anything absent or unusable.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        match parameters {
            Parameters::Gear(params) => params.sanitized(),
            _ => Self::default(),
        }
    }

    /// Replaces unusable fields with their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            teeth_count: if self.teeth_count == 0 {
                defaults.teeth_count
            } else {
                self.teeth_count
            },
            diameter: positive_or(self.diameter, defaults.diameter),
            thickness: positive_or(self.thickness, defaults.thickness),
        }
    }
}

// =============================================================================
// PAPER AIRPLANE
// =============================================================================

/// Fold pattern of a paper airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AirplaneKind {
    /// Narrow classic dart
    #[default]
    Dart,
    /// Long-winged glider
    Glider,
    /// Sharp-angled stunt plane
    Stunt,
    /// Triangular delta wing
    Delta,
}

impl AirplaneKind {
    /// Lowercase name, as it appears in serialized parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            AirplaneKind::Dart => "dart",
            AirplaneKind::Glider => "glider",
            AirplaneKind::Stunt => "stunt",
            AirplaneKind::Delta => "delta",
        }
    }
}

/// Paper airplane outline in millimeters, plus variant and paper color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperAirplaneParameters {
    /// Tip-to-tip span
    pub wingspan: f64,
    /// Nose-to-tail length
    pub length: f64,
    /// Fold pattern
    #[serde(rename = "type")]
    pub kind: AirplaneKind,
    /// `#rrggbb` paper color
    pub paper_color: String,
}

impl Default for PaperAirplaneParameters {
    fn default() -> Self {
        Self {
            wingspan: DEFAULT_WINGSPAN_MM,
            length: DEFAULT_AIRPLANE_LENGTH_MM,
            kind: AirplaneKind::Dart,
            paper_color: DEFAULT_PAPER_COLOR.to_string(),
        }
    }
}

impl PaperAirplaneParameters {
    /// Reads airplane parameters, using defaults for anything absent or unusable.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        match parameters {
            Parameters::PaperAirplane(params) => params.sanitized(),
            _ => Self::default(),
        }
    }

    /// Replaces unusable fields with their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            wingspan: positive_or(self.wingspan, defaults.wingspan),
            length: positive_or(self.length, defaults.length),
            kind: self.kind,
            paper_color: if is_hex_color(&self.paper_color) {
                self.paper_color.clone()
            } else {
                defaults.paper_color
            },
        }
    }
}

/// Accepts `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
