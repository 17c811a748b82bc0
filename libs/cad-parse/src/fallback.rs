//! # Keyword Fallbacks
//!
//! A fixed, ordered cascade of generic keyword rules consulted when no
//! classifier claimed the text. Each rule maps to a bare family name; only
//! the airplane rule carries parameters (the full airplane defaults).

use regex::Regex;
use tracing::debug;

use crate::classifier::pattern;
use crate::error::ParseError;
use crate::model::{
    ModelInfo, PaperAirplaneParameters, Parameters, BOX_FAMILY, CYLINDER_FAMILY, GEAR_FAMILY,
    PAPER_AIRPLANE_FAMILY,
};

/// One keyword rule of the fallback cascade.
#[derive(Debug)]
pub struct KeywordFallback {
    family: &'static str,
    keywords: Regex,
    veto: Option<Regex>,
    parameters: fn() -> Parameters,
}

impl KeywordFallback {
    /// Creates a rule mapping `keywords` to a bare family.
    pub fn new(family: &'static str, keywords: &str) -> Result<Self, ParseError> {
        Ok(Self {
            family,
            keywords: pattern(keywords)?,
            veto: None,
            parameters: || Parameters::Empty,
        })
    }

    /// Suppresses the rule when `veto` also matches.
    pub fn unless(mut self, veto: &str) -> Result<Self, ParseError> {
        self.veto = Some(pattern(veto)?);
        Ok(self)
    }

    /// Attaches parameters to the produced model info.
    pub fn with_parameters(mut self, parameters: fn() -> Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Family this rule produces.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Returns true if the rule fires for the text.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.is_match(text) && !self.veto.as_ref().is_some_and(|veto| veto.is_match(text))
    }
}

/// Ordered list of keyword rules; the first rule that fires wins.
#[derive(Debug)]
pub struct FallbackTable {
    rules: Vec<KeywordFallback>,
}

impl FallbackTable {
    /// Builds a table from rules in priority order.
    pub fn new(rules: Vec<KeywordFallback>) -> Self {
        Self { rules }
    }

    /// The standard cascade: airplane words (unless engine words appear),
    /// then gear, box, cylinder, sphere, bracket and enclosure keywords.
    pub fn standard() -> Result<Self, ParseError> {
        Ok(Self::new(vec![
            KeywordFallback::new(
                PAPER_AIRPLANE_FAMILY,
                r"(?-u:\b)(?:plane|aircraft|wing|origami|glider|paper)(?-u:\b)",
            )?
            .unless(r"(?-u:\b)(?:engine|motor|jet|combustion)(?-u:\b)")?
            .with_parameters(|| Parameters::PaperAirplane(PaperAirplaneParameters::default())),
            KeywordFallback::new(GEAR_FAMILY, r"gear|sprocket|cog")?,
            KeywordFallback::new(BOX_FAMILY, r"box|cube|rectangular|cuboid")?,
            KeywordFallback::new(CYLINDER_FAMILY, r"cylinder|tube|pipe|rod")?,
            KeywordFallback::new("sphere", r"sphere|ball|globe")?,
            KeywordFallback::new("bracket", r"bracket|mount|support")?,
            KeywordFallback::new("enclosure", r"enclosure|case|container")?,
        ]))
    }

    /// Returns the model info of the first rule that fires.
    pub fn resolve(&self, text: &str) -> Option<ModelInfo> {
        let rule = self.rules.iter().find(|rule| rule.matches(text))?;
        debug!(family = rule.family, "keyword fallback matched");
        Some(ModelInfo::new(rule.family, (rule.parameters)()))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
