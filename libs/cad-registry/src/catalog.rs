//! # Standard Catalog
//!
//! The statically declared list of classifier/builder pairs. Catalog order
//! is classifier precedence: paper airplanes come first so that airplane
//! vocabulary is never read as a cylinder ("tube") or a bare keyword.

use cad_mesh::{BoxBuilder, CylinderBuilder, GearBuilder, PaperAirplaneBuilder, ShapeBuilder};
use cad_parse::{
    BoxClassifier, Classifier, CylinderClassifier, GearClassifier, PaperAirplaneClassifier,
    ParseError,
};
use config::display::DisplayConfig;

use crate::error::RegistryError;
use crate::registry::{Registry, RegistryBuilder};

/// One shape family: how to recognize it and how to build it.
pub struct CatalogEntry {
    pub classifier: Box<dyn Classifier>,
    pub builder: Box<dyn ShapeBuilder>,
}

/// The four built-in families in precedence order.
pub fn standard_catalog(display: DisplayConfig) -> Result<Vec<CatalogEntry>, ParseError> {
    Ok(vec![
        CatalogEntry {
            classifier: Box::new(PaperAirplaneClassifier::new()?),
            builder: Box::new(PaperAirplaneBuilder::new(display)),
        },
        CatalogEntry {
            classifier: Box::new(GearClassifier::new()?),
            builder: Box::new(GearBuilder::new(display)),
        },
        CatalogEntry {
            classifier: Box::new(BoxClassifier::new()?),
            builder: Box::new(BoxBuilder::new(display)),
        },
        CatalogEntry {
            classifier: Box::new(CylinderClassifier::new()?),
            builder: Box::new(CylinderBuilder::new(display)),
        },
    ])
}

impl RegistryBuilder {
    /// Registers a catalog entry's classifier and builder.
    pub fn register_entry(self, entry: CatalogEntry) -> Self {
        self.register_classifier(entry.classifier)
            .register_builder(entry.builder)
    }

    /// Registers every entry, keeping catalog order.
    pub fn register_catalog(self, catalog: Vec<CatalogEntry>) -> Self {
        catalog.into_iter().fold(self, Self::register_entry)
    }
}

impl Registry {
    /// Registry of the standard catalog with default display settings.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::with_display(DisplayConfig::default())
    }

    /// Registry of the standard catalog with the given display settings.
    pub fn with_display(display: DisplayConfig) -> Result<Self, RegistryError> {
        Registry::builder()
            .register_catalog(standard_catalog(display)?)
            .build()
    }
}
