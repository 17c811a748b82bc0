//! # CAD Registry
//!
//! Ties the pipeline together: text is interpreted into a [`ModelInfo`] by an
//! ordered set of classifiers, then handed to the builder registered for its
//! family.
//!
//! ## Architecture
//!
//! ```text
//! standard_catalog() → RegistryBuilder → Registry
//!                                          ├─ interpret(text) → ModelInfo
//!                                          └─ render(info)    → RenderOutcome
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cad_registry::{Registry, RenderOutcome};
//!
//! let registry = Registry::standard().unwrap();
//! let info = registry.interpret("a cylinder with 40mm diameter and 120mm height");
//! assert_eq!(info.family, "cylinder");
//!
//! match registry.render(&info).unwrap() {
//!     RenderOutcome::Rendered(model) => assert!(model.mesh.is_watertight()),
//!     other => panic!("{:?}", other.message()),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod registry;
pub mod render;

pub use cad_parse::ModelInfo;
pub use catalog::{standard_catalog, CatalogEntry};
pub use error::RegistryError;
pub use registry::{Registry, RegistryBuilder};
pub use render::{RenderOutcome, RenderedModel};
