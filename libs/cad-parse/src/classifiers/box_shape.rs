//! # Box Classifier
//!
//! Claims boxes, cubes and cuboids. Dimensions are read from
//! `<N> mm width|wide`, `<N> mm height|high|tall` and
//! `<N> mm depth|deep|length|long`.

use regex::Regex;

use crate::classifier::{capture_length, pattern, Classifier};
use crate::error::{ExtractError, ParseError};
use crate::model::{BoxParameters, Parameters, BOX_FAMILY};

/// Classifier for the `box` family.
#[derive(Debug)]
pub struct BoxClassifier {
    keywords: Regex,
    width: Regex,
    height: Regex,
    depth: Regex,
    rounded: Regex,
}

impl BoxClassifier {
    /// Compiles the box patterns.
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            keywords: pattern(r"box|cube|rectangular|cuboid")?,
            width: pattern(r"([0-9]+)\s*mm\s*(?:width|wide)")?,
            height: pattern(r"([0-9]+)\s*mm\s*(?:height|high|tall)")?,
            depth: pattern(r"([0-9]+)\s*mm\s*(?:depth|deep|length|long)")?,
            rounded: pattern(r"rounded|chamfered|beveled")?,
        })
    }
}

impl Classifier for BoxClassifier {
    fn family(&self) -> &str {
        BOX_FAMILY
    }

    fn can_handle(&self, text: &str) -> bool {
        self.keywords.is_match(text)
    }

    fn try_parameters(&self, text: &str) -> Result<Parameters, ExtractError> {
        let defaults = BoxParameters::default();
        Ok(Parameters::Box(BoxParameters {
            width: capture_length(&self.width, text, "width")?.unwrap_or(defaults.width),
            height: capture_length(&self.height, text, "height")?.unwrap_or(defaults.height),
            depth: capture_length(&self.depth, text, "depth")?.unwrap_or(defaults.depth),
            rounded: self.rounded.is_match(text),
        }))
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::Box(BoxParameters::default())
    }
}
