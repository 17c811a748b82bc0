//! # Gear Classifier
//!
//! Claims gears, sprockets and cogs and reads `<N> teeth`,
//! `<N> mm diameter` and `<N> mm thick`.

use regex::Regex;

use crate::classifier::{capture_count, capture_length, pattern, Classifier};
use crate::error::{ExtractError, ParseError};
use crate::model::{GearParameters, Parameters, GEAR_FAMILY};

/// Classifier for the `gear` family.
#[derive(Debug)]
pub struct GearClassifier {
    keywords: Regex,
    teeth: Regex,
    diameter: Regex,
    thickness: Regex,
}

impl GearClassifier {
    /// Compiles the gear patterns.
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            keywords: pattern(r"gear|sprocket|cog")?,
            teeth: pattern(r"([0-9]+)\s*teeth")?,
            diameter: pattern(r"([0-9]+)\s*mm\s*diameter")?,
            thickness: pattern(r"([0-9]+)\s*mm\s*thick")?,
        })
    }
}

impl Classifier for GearClassifier {
    fn family(&self) -> &str {
        GEAR_FAMILY
    }

    fn can_handle(&self, text: &str) -> bool {
        self.keywords.is_match(text)
    }

    fn try_parameters(&self, text: &str) -> Result<Parameters, ExtractError> {
        let defaults = GearParameters::default();
        Ok(Parameters::Gear(GearParameters {
            teeth_count: capture_count(&self.teeth, text, "teethCount")?
                .unwrap_or(defaults.teeth_count),
            diameter: capture_length(&self.diameter, text, "diameter")?
                .unwrap_or(defaults.diameter),
            thickness: capture_length(&self.thickness, text, "thickness")?
                .unwrap_or(defaults.thickness),
        }))
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::Gear(GearParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Parameters {
        GearClassifier::new().unwrap().extract(text).parameters
    }

    #[test]
    fn test_gear_keywords() {
        let classifier = GearClassifier::new().unwrap();
        assert!(classifier.can_handle("a spur gear"));
        assert!(classifier.can_handle("bicycle Sprocket"));
        assert!(classifier.can_handle("a cog"));
        assert!(!classifier.can_handle("a pulley"));
    }

    #[test]
    fn test_gear_defaults() {
        assert_eq!(
            extract("a gear"),
            Parameters::Gear(GearParameters {
                teeth_count: 12,
                diameter: 50.0,
                thickness: 10.0,
            })
        );
    }

    #[test]
    fn test_gear_teeth_and_diameter() {
        assert_eq!(
            extract("a gear with 20 teeth and 80mm diameter"),
            Parameters::Gear(GearParameters {
                teeth_count: 20,
                diameter: 80.0,
                thickness: 10.0,
            })
        );
    }

    #[test]
    fn test_gear_structured_lines() {
        let text = "MODEL SPECIFICATIONS:\n- Type: Spur Gear\n\nPARAMETERS:\n\
                    - Teeth Count: 24 teeth\n- Diameter: 60 mm diameter\n- Thickness: 8 mm thick\n";
        assert_eq!(
            extract(text),
            Parameters::Gear(GearParameters {
                teeth_count: 24,
                diameter: 60.0,
                thickness: 8.0,
            })
        );
    }

    #[test]
    fn test_gear_ignores_non_ascii_digits() {
        // Arabic-Indic "80" is not a number here; the tooth count survives
        assert_eq!(
            extract("a gear with 20 teeth and \u{0668}\u{0660}mm diameter"),
            Parameters::Gear(GearParameters {
                teeth_count: 20,
                diameter: 50.0,
                thickness: 10.0,
            })
        );
    }

    #[test]
    fn test_gear_overflowing_teeth_falls_back_to_defaults() {
        let info = GearClassifier::new()
            .unwrap()
            .extract("a gear with 99999999999 teeth and 80mm diameter");
        assert_eq!(info.family, "gear");
        assert_eq!(info.parameters, Parameters::Gear(GearParameters::default()));
    }

    #[test]
    fn test_gear_try_parameters_reports_overflow() {
        let classifier = GearClassifier::new().unwrap();
        assert!(classifier.try_parameters("99999999999 teeth").is_err());
    }
}
