//! # Interpretation Registry
//!
//! Resolves a text to exactly one [`ModelInfo`] and a family name to its
//! builder.
//!
//! ## Resolution order
//!
//! 1. Empty text → `unknown`
//! 2. Classifiers in registration order, first match wins
//! 3. A `Type:` marker hint, returned bare
//! 4. The keyword fallback cascade
//! 5. `unknown`
//!
//! The registry is assembled once through [`RegistryBuilder`] and is
//! read-only afterwards, so one instance can serve any number of threads.

use std::collections::HashMap;
use std::fmt;

use cad_mesh::ShapeBuilder;
use cad_parse::{Classifier, FallbackTable, ModelInfo, TypeMarker};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::RegistryError;

/// Immutable set of classifiers and builders.
pub struct Registry {
    classifiers: Vec<Box<dyn Classifier>>,
    builders: Vec<Box<dyn ShapeBuilder>>,
    /// Family name → index of its first registered builder
    by_family: HashMap<String, usize>,
    marker: TypeMarker,
    fallbacks: FallbackTable,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("classifiers", &self.classifier_families())
            .field("builders", &self.supported_families())
            .field("fallbacks", &self.fallbacks.len())
            .finish()
    }
}

impl Registry {
    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Interprets a text as one shape family.
    ///
    /// Never fails: unrecognized text yields the `unknown` family.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cad_registry::Registry;
    ///
    /// let registry = Registry::standard().unwrap();
    /// assert_eq!(registry.interpret("a gear").family, "gear");
    /// assert_eq!(registry.interpret("hello").family, "unknown");
    /// ```
    pub fn interpret(&self, text: &str) -> ModelInfo {
        if text.trim().is_empty() {
            return ModelInfo::unknown();
        }

        let hint = self.marker.hint(text);

        if let Some(classifier) = self.classifiers.iter().find(|c| c.can_handle(text)) {
            debug!(family = classifier.family(), "classifier matched");
            return classifier.extract(text);
        }

        if let Some(family) = hint {
            debug!(%family, "using type marker hint");
            return ModelInfo::bare(family);
        }

        self.fallbacks.resolve(text).unwrap_or_else(|| {
            debug!("no classifier, hint or fallback matched");
            ModelInfo::unknown()
        })
    }

    /// Interprets many texts in parallel. Output order matches input order.
    pub fn interpret_all<S>(&self, texts: &[S]) -> Vec<ModelInfo>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.interpret(text.as_ref()))
            .collect()
    }

    /// Interprets a text and serializes the result as JSON.
    pub fn interpret_json(&self, text: &str) -> Result<String, RegistryError> {
        Ok(serde_json::to_string(&self.interpret(text))?)
    }

    /// Looks up the builder for a family by exact name.
    ///
    /// `None` is a normal outcome: the family may be recognized without
    /// having a 3D representation.
    pub fn find_builder(&self, family: &str) -> Option<&dyn ShapeBuilder> {
        self.by_family
            .get(family)
            .map(|&index| self.builders[index].as_ref())
    }

    /// Family name of every registered builder, in registration order.
    pub fn supported_families(&self) -> Vec<&str> {
        self.builders.iter().map(|b| b.family()).collect()
    }

    /// Family name of every classifier, in precedence order.
    pub fn classifier_families(&self) -> Vec<&str> {
        self.classifiers.iter().map(|c| c.family()).collect()
    }
}

/// Collects classifiers and builders, then freezes them into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    classifiers: Vec<Box<dyn Classifier>>,
    builders: Vec<Box<dyn ShapeBuilder>>,
    fallbacks: Option<FallbackTable>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a classifier. Earlier classifiers take precedence.
    pub fn register_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifiers.push(classifier);
        self
    }

    /// Appends a builder. For duplicate family names the first one wins.
    pub fn register_builder(mut self, builder: Box<dyn ShapeBuilder>) -> Self {
        self.builders.push(builder);
        self
    }

    /// Replaces the standard keyword fallback cascade.
    pub fn fallbacks(mut self, fallbacks: FallbackTable) -> Self {
        self.fallbacks = Some(fallbacks);
        self
    }

    /// Freezes the registrations.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut by_family = HashMap::with_capacity(self.builders.len());
        for (index, builder) in self.builders.iter().enumerate() {
            if by_family.contains_key(builder.family()) {
                warn!(
                    family = builder.family(),
                    "duplicate builder registration ignored for lookup"
                );
            } else {
                by_family.insert(builder.family().to_string(), index);
            }
        }

        let fallbacks = match self.fallbacks {
            Some(table) => table,
            None => FallbackTable::standard()?,
        };

        Ok(Registry {
            classifiers: self.classifiers,
            builders: self.builders,
            by_family,
            marker: TypeMarker::new()?,
            fallbacks,
        })
    }
}
