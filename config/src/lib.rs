//! # Config Crate
//!
//! Centralized configuration for the text-to-shape pipeline. Every default
//! dimension, display scale and tessellation count is defined here so the
//! classifiers and the builders agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_GEAR_DIAMETER_MM, DEFAULT_SEGMENTS};
//! use config::display::DisplayConfig;
//!
//! // A default gear is exactly one display unit across
//! assert_eq!(DisplayConfig::default().normalize(DEFAULT_GEAR_DIAMETER_MM), 1.0);
//!
//! // Cylinders use a fixed radial resolution
//! assert_eq!(DEFAULT_SEGMENTS, 32);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: classifier defaults and builder defaults
//!   read the same constants
//! - **Millimeters In, Units Out**: all inputs are millimeters, normalized
//!   by one reference length

pub mod constants;
pub mod display;

#[cfg(test)]
mod tests;
