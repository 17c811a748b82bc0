//! # CAD Mesh
//!
//! Parametric mesh generation for classified shape families.
//!
//! ## Architecture
//!
//! ```text
//! cad-parse (Parameters) → ShapeBuilder → primitives → Mesh + Material
//! ```
//!
//! Builders divide millimeter dimensions by the shared reference length from
//! [`config::display::DisplayConfig`], build in f64, orient the result Y-up
//! and derive vertex normals last.
//!
//! ## Usage
//!
//! ```rust
//! use cad_mesh::{GearBuilder, ShapeBuilder};
//! use cad_parse::{GearParameters, Parameters};
//!
//! let params = Parameters::Gear(GearParameters::default());
//! let mesh = GearBuilder::default().build(&params).unwrap();
//! assert!(mesh.is_watertight());
//! ```

pub mod builder;
pub mod builders;
pub mod error;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use builder::ShapeBuilder;
pub use builders::{BoxBuilder, CylinderBuilder, GearBuilder, PaperAirplaneBuilder};
pub use error::MeshError;
pub use material::Material;
pub use mesh::{Mesh, MeshBuffers};
