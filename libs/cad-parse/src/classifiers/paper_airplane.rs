//! # Paper Airplane Classifier
//!
//! Claims paper airplanes from a broad set of phrasings ("paper plane",
//! "origami plane", "delta wing", a bare "plane", ...) or from loose
//! airplane vocabulary such as "wingspan" and "glider".
//!
//! The fold pattern and paper color are each picked by the first matching
//! bucket in a fixed order; dart and white are the fallbacks.

use regex::Regex;
use tracing::debug;

use config::constants::DEFAULT_PAPER_COLOR;

use crate::classifier::{capture_length, pattern, Classifier};
use crate::error::{ExtractError, ParseError};
use crate::model::{AirplaneKind, PaperAirplaneParameters, Parameters, PAPER_AIRPLANE_FAMILY};

/// Vocabulary that marks a text as being about paper airplanes. Other
/// classifiers use it to step aside.
pub const PAPER_AIRPLANE_VOCABULARY: &str = r"paper\s*(?:air)?plane|origami|folded\s*plane|delta\s*wing";

const PRIMARY: &str = r"paper\s*(?:air)?plane|origami\s*plane|folded\s*plane|simple\s*plane|(?-u:\b)plane(?-u:\b)|delta\s*wing|paper\s*(?:glider|dart)|paper\s*(?:model|craft)|(?-u:\b)aircraft(?-u:\b).*paper";

const KIND_BUCKETS: [(&str, AirplaneKind); 3] = [
    (r"glider|long\s*range", AirplaneKind::Glider),
    (r"stunt|trick|acrobatic", AirplaneKind::Stunt),
    (r"delta|wing|triangular", AirplaneKind::Delta),
];

const COLOR_BUCKETS: [(&str, &str); 4] = [
    (r"red\s*paper|paper\s*red", "#f44336"),
    (r"blue\s*paper|paper\s*blue", "#2196f3"),
    (r"green\s*paper|paper\s*green", "#4caf50"),
    (r"yellow\s*paper|paper\s*yellow", "#ffeb3b"),
];

/// Classifier for the `paperAirplane` family.
#[derive(Debug)]
pub struct PaperAirplaneClassifier {
    primary: Regex,
    wingspan: Regex,
    length: Regex,
    kinds: Vec<(Regex, AirplaneKind)>,
    colors: Vec<(Regex, &'static str)>,
}

impl PaperAirplaneClassifier {
    /// Compiles the airplane patterns and buckets.
    pub fn new() -> Result<Self, ParseError> {
        let kinds = KIND_BUCKETS
            .iter()
            .map(|(source, kind)| Ok((pattern(source)?, *kind)))
            .collect::<Result<Vec<_>, ParseError>>()?;
        let colors = COLOR_BUCKETS
            .iter()
            .map(|(source, hex)| Ok((pattern(source)?, *hex)))
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Self {
            primary: pattern(PRIMARY)?,
            wingspan: pattern(r"([0-9]+)\s*mm\s*wingspan")?,
            length: pattern(r"([0-9]+)\s*mm\s*length")?,
            kinds,
            colors,
        })
    }

    /// Picks the fold pattern from the first matching bucket.
    pub fn kind_of(&self, text: &str) -> AirplaneKind {
        self.kinds
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, kind)| *kind)
            .unwrap_or_default()
    }

    /// Picks the paper color from the first matching bucket.
    pub fn color_of(&self, text: &str) -> &'static str {
        self.colors
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, hex)| *hex)
            .unwrap_or(DEFAULT_PAPER_COLOR)
    }
}

/// Loose vocabulary check used when the primary pattern misses.
fn mentions_airplane(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("wingspan")
        || lower.contains("delta wing")
        || lower.contains("glider")
        || (lower.contains("paper")
            && (lower.contains("plane") || lower.contains("aircraft") || lower.contains("wing")))
}

impl Classifier for PaperAirplaneClassifier {
    fn family(&self) -> &str {
        PAPER_AIRPLANE_FAMILY
    }

    fn can_handle(&self, text: &str) -> bool {
        let matched = self.primary.is_match(text) || mentions_airplane(text);
        debug!(matched, "paper airplane classifier checked input");
        matched
    }

    fn try_parameters(&self, text: &str) -> Result<Parameters, ExtractError> {
        let defaults = PaperAirplaneParameters::default();
        Ok(Parameters::PaperAirplane(PaperAirplaneParameters {
            wingspan: capture_length(&self.wingspan, text, "wingspan")?
                .unwrap_or(defaults.wingspan),
            length: capture_length(&self.length, text, "length")?.unwrap_or(defaults.length),
            kind: self.kind_of(text),
            paper_color: self.color_of(text).to_string(),
        }))
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::PaperAirplane(PaperAirplaneParameters::default())
    }
}
