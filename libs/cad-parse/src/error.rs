//! # Parse Errors
//!
//! Error types for classifier construction and parameter extraction.
//!
//! Extraction errors never leave a classifier: [`crate::Classifier::extract`]
//! recovers them into the family defaults. They are public so classifiers
//! can be tested on the failing path.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors raised while building classifiers.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A keyword or parameter pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern source
        pattern: String,
        /// Regex compiler error
        source: regex::Error,
    },
}

/// Errors raised while extracting parameters from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// An integer count did not fit its field.
    #[error("Invalid count for {field}: '{value}' ({source})")]
    InvalidCount {
        /// Parameter name
        field: &'static str,
        /// Captured digits
        value: String,
        /// Integer parse error
        source: ParseIntError,
    },

    /// A length could not be read as a number.
    #[error("Invalid length for {field}: '{value}' ({source})")]
    InvalidLength {
        /// Parameter name
        field: &'static str,
        /// Captured digits
        value: String,
        /// Float parse error
        source: ParseFloatError,
    },

    /// A length parsed but is not finite.
    #[error("Length out of range for {field}: '{value}'")]
    OutOfRange {
        /// Parameter name
        field: &'static str,
        /// Captured digits
        value: String,
    },
}
