//! # Primitives
//!
//! Mesh generation for the shape families (box, cylinder, gear, paper
//! airplane). Inputs are already in display units.

pub mod cuboid;
pub mod cylinder;
pub mod gear;
pub mod paper_airplane;

pub use cuboid::create_cuboid;
pub use cylinder::create_cylinder;
pub use gear::{create_gear, extrude_annulus, gear_profile};
pub use paper_airplane::create_paper_airplane;
