//! Display settings shared by every shape builder.
//!
//! Builders receive one `DisplayConfig` from the catalog so that all families
//! scale against the same reference length.

use std::fmt;

use crate::constants::{REFERENCE_LENGTH_MM, ROUNDED_BOX_SUBDIVISIONS};

/// Immutable snapshot of display settings handed to shape builders.
///
/// # Examples
/// ```
/// use config::display::DisplayConfig;
/// let config = DisplayConfig::default();
/// assert_eq!(config.normalize(50.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    /// Millimeters per display unit.
    pub reference_length: f64,
    /// Subdivisions per axis for the rounded box variant.
    pub rounded_subdivisions: u32,
}

impl DisplayConfig {
    /// Builds a configuration, rejecting values no builder could use.
    ///
    /// # Examples
    /// ```
    /// use config::display::DisplayConfig;
    /// let cfg = DisplayConfig::new(25.0, 8).expect("valid config");
    /// assert_eq!(cfg.normalize(50.0), 2.0);
    /// assert!(DisplayConfig::new(0.0, 8).is_err());
    /// ```
    pub fn new(reference_length: f64, rounded_subdivisions: u32) -> Result<Self, ConfigError> {
        if !reference_length.is_finite() || reference_length <= 0.0 {
            return Err(ConfigError::InvalidReferenceLength(reference_length));
        }
        if rounded_subdivisions == 0 {
            return Err(ConfigError::InvalidSubdivisions(rounded_subdivisions));
        }
        Ok(Self {
            reference_length,
            rounded_subdivisions,
        })
    }

    /// Converts millimeters into display units.
    #[inline]
    pub fn normalize(&self, millimeters: f64) -> f64 {
        millimeters / self.reference_length
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reference_length: REFERENCE_LENGTH_MM,
            rounded_subdivisions: ROUNDED_BOX_SUBDIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the reference length is zero, negative or not finite.
    InvalidReferenceLength(f64),
    /// Raised when the rounded box would have no subdivisions.
    InvalidSubdivisions(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidReferenceLength(value) => {
                write!(f, "reference length must be positive: {value}")
            }
            ConfigError::InvalidSubdivisions(value) => {
                write!(f, "rounded subdivisions must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
