//! # CAD Parse
//!
//! Turns a free-form text description of a part into a typed [`ModelInfo`].
//!
//! ## Architecture
//!
//! ```text
//! text → Classifier (ordered, first match) → ModelInfo
//!      ↘ TypeMarker hint ↘ FallbackTable keywords ↘ unknown
//! ```
//!
//! This crate provides the pieces; the ordering lives in `cad-registry`.
//!
//! ## Usage
//!
//! ```rust
//! use cad_parse::{Classifier, GearClassifier, Parameters};
//!
//! let gear = GearClassifier::new().unwrap();
//! let info = gear.extract("a gear with 20 teeth and 80mm diameter");
//! assert_eq!(info.family, "gear");
//! assert!(matches!(info.parameters, Parameters::Gear(p) if p.teeth_count == 20));
//! ```

pub mod classifier;
pub mod classifiers;
pub mod error;
pub mod fallback;
pub mod marker;
pub mod model;

pub use classifier::Classifier;
pub use classifiers::{BoxClassifier, CylinderClassifier, GearClassifier, PaperAirplaneClassifier};
pub use error::{ExtractError, ParseError};
pub use fallback::{FallbackTable, KeywordFallback};
pub use marker::TypeMarker;
pub use model::{
    AirplaneKind, BoxParameters, CylinderParameters, GearParameters, ModelInfo,
    PaperAirplaneParameters, Parameters, BOX_FAMILY, CYLINDER_FAMILY, GEAR_FAMILY,
    PAPER_AIRPLANE_FAMILY,
};
