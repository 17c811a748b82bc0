//! # Cylinder Classifier
//!
//! Claims cylinders, tubes, pipes and rods unless the text uses paper
//! airplane vocabulary. A diameter takes precedence over a radius; a height
//! takes precedence over a length.

use config::constants::DEFAULT_SEGMENTS;
use regex::Regex;

use crate::classifier::{capture_length, pattern, Classifier};
use crate::classifiers::paper_airplane::PAPER_AIRPLANE_VOCABULARY;
use crate::error::{ExtractError, ParseError};
use crate::model::{CylinderParameters, Parameters, CYLINDER_FAMILY};

/// Classifier for the `cylinder` family.
#[derive(Debug)]
pub struct CylinderClassifier {
    excluded: Regex,
    keywords: Regex,
    radius: Regex,
    diameter: Regex,
    height: Regex,
    length: Regex,
}

impl CylinderClassifier {
    /// Compiles the cylinder patterns.
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            excluded: pattern(PAPER_AIRPLANE_VOCABULARY)?,
            keywords: pattern(r"cylinder|tube|pipe|rod")?,
            radius: pattern(r"([0-9]+)\s*mm\s*radius")?,
            diameter: pattern(r"([0-9]+)\s*mm\s*diameter")?,
            height: pattern(r"([0-9]+)\s*mm\s*(?:height|high|tall)")?,
            length: pattern(r"([0-9]+)\s*mm\s*(?:length|long)")?,
        })
    }
}

impl Classifier for CylinderClassifier {
    fn family(&self) -> &str {
        CYLINDER_FAMILY
    }

    fn can_handle(&self, text: &str) -> bool {
        // Airplane vocabulary short-circuits before the keyword test
        if self.excluded.is_match(text) {
            return false;
        }
        self.keywords.is_match(text)
    }

    fn try_parameters(&self, text: &str) -> Result<Parameters, ExtractError> {
        let defaults = CylinderParameters::default();

        let radius = match capture_length(&self.diameter, text, "diameter")? {
            Some(diameter) => diameter / 2.0,
            None => capture_length(&self.radius, text, "radius")?.unwrap_or(defaults.radius),
        };

        let height = match capture_length(&self.height, text, "height")? {
            Some(height) => height,
            None => capture_length(&self.length, text, "length")?.unwrap_or(defaults.height),
        };

        Ok(Parameters::Cylinder(CylinderParameters {
            radius,
            height,
            segments: DEFAULT_SEGMENTS,
        }))
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::Cylinder(CylinderParameters::default())
    }
}
