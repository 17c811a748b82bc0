//! Reader for the structured `Type: <name>` marker line.

use regex::Regex;

use crate::classifier::pattern;
use crate::error::ParseError;

/// Finds a `Type:` marker and returns the hinted family name.
#[derive(Debug)]
pub struct TypeMarker {
    marker: Regex,
}

impl TypeMarker {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            // Name stays on the marker's line
            marker: pattern(r"Type:[ \t]*([a-zA-Z0-9 \t]+)")?,
        })
    }

    /// Lowercased, trimmed family hint, or `None` if there is no marker or
    /// its name is blank.
    pub fn hint(&self, text: &str) -> Option<String> {
        let name = self.marker.captures(text)?.get(1)?.as_str().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(text: &str) -> Option<String> {
        TypeMarker::new().unwrap().hint(text)
    }

    #[test]
    fn test_marker_hint() {
        assert_eq!(hint("- Type: Mounting Bracket\n- Width: 30"), Some("mounting bracket".into()));
        assert_eq!(hint("type:enclosure"), Some("enclosure".into()));
    }

    #[test]
    fn test_marker_stops_at_punctuation() {
        assert_eq!(hint("Type: hinge, brass"), Some("hinge".into()));
    }

    #[test]
    fn test_missing_or_blank_marker() {
        assert_eq!(hint("a bracket"), None);
        assert_eq!(hint("Type:   \nWidth: 30mm"), None);
        assert_eq!(hint("Type: -"), None);
    }
}
