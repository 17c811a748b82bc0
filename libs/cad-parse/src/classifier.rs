//! # Classifier
//!
//! The contract every shape family implements to claim a text and pull its
//! parameters out, plus the shared pattern and number-capture helpers.

use regex::Regex;
use tracing::warn;

use crate::error::{ExtractError, ParseError};
use crate::model::{ModelInfo, Parameters};

/// Decides whether a text describes one shape family and extracts its
/// parameters.
///
/// Classifiers are stateless after construction. They are tried in
/// registration order and the first one whose [`can_handle`] returns true
/// wins, so they do not need to be mutually exclusive.
///
/// [`can_handle`]: Classifier::can_handle
pub trait Classifier: Send + Sync {
    /// Family name this classifier produces.
    fn family(&self) -> &str;

    /// Returns true if the text belongs to this family.
    fn can_handle(&self, text: &str) -> bool;

    /// Extracts parameters, reporting malformed numbers as errors.
    fn try_parameters(&self, text: &str) -> Result<Parameters, ExtractError>;

    /// Parameters used when extraction fails.
    fn default_parameters(&self) -> Parameters;

    /// Extracts model info, never failing.
    ///
    /// Any [`ExtractError`] is logged and replaced by the family defaults.
    fn extract(&self, text: &str) -> ModelInfo {
        let parameters = self.try_parameters(text).unwrap_or_else(|err| {
            warn!(family = self.family(), error = %err, "parameter extraction failed, using defaults");
            self.default_parameters()
        });
        ModelInfo::new(self.family(), parameters)
    }
}

/// Compiles a case-insensitive pattern.
pub fn pattern(source: &str) -> Result<Regex, ParseError> {
    Regex::new(&format!("(?i){source}")).map_err(|err| ParseError::Pattern {
        pattern: source.to_string(),
        source: err,
    })
}

/// Captures group 1 of `re` as an integer count.
pub fn capture_count(re: &Regex, text: &str, field: &'static str) -> Result<Option<u32>, ExtractError> {
    let Some(digits) = first_group(re, text) else {
        return Ok(None);
    };
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|source| ExtractError::InvalidCount {
            field,
            value: digits.to_string(),
            source,
        })
}

/// Captures group 1 of `re` as a length in millimeters.
pub fn capture_length(re: &Regex, text: &str, field: &'static str) -> Result<Option<f64>, ExtractError> {
    let Some(digits) = first_group(re, text) else {
        return Ok(None);
    };
    let value = digits
        .parse::<f64>()
        .map_err(|source| ExtractError::InvalidLength {
            field,
            value: digits.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(ExtractError::OutOfRange {
            field,
            value: digits.to_string(),
        });
    }
    Ok(Some(value))
}

fn first_group<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
