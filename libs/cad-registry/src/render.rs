//! # Renderer Adapter
//!
//! Hands a [`ModelInfo`] to the matching builder and reports one of three
//! outcomes a viewer can present: a rendered model, an unrecognized text, or
//! a recognized family that has no 3D representation yet.

use cad_mesh::{Material, Mesh, MeshBuffers};
use cad_parse::ModelInfo;
use serde::Serialize;
use tracing::warn;

use crate::error::RegistryError;
use crate::registry::Registry;

/// A built mesh with its display material.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModel {
    pub family: String,
    pub mesh: Mesh,
    pub material: Material,
}

/// Serializable view of a [`RenderedModel`] for a GPU viewer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedView<'a> {
    family: &'a str,
    material: &'a Material,
    buffers: MeshBuffers,
}

impl RenderedModel {
    /// Exports family, material and flattened buffers as JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let view = RenderedView {
            family: &self.family,
            material: &self.material,
            buffers: self.mesh.to_buffers(),
        };
        Ok(serde_json::to_string(&view)?)
    }
}

/// Result of rendering a [`ModelInfo`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// A builder produced a mesh
    Rendered(RenderedModel),
    /// The text was not recognized at all
    Unrecognized { supported: Vec<String> },
    /// The family was recognized but has no builder
    Unsupported {
        family: String,
        supported: Vec<String>,
    },
}

impl RenderOutcome {
    /// Returns the rendered model, if any.
    pub fn rendered(&self) -> Option<&RenderedModel> {
        match self {
            RenderOutcome::Rendered(model) => Some(model),
            _ => None,
        }
    }

    /// User-facing explanation for the two non-rendered outcomes.
    ///
    /// ```rust
    /// use cad_registry::RenderOutcome;
    ///
    /// let outcome = RenderOutcome::Unsupported {
    ///     family: "bracket".to_string(),
    ///     supported: vec!["gear".to_string(), "box".to_string()],
    /// };
    /// assert_eq!(
    ///     outcome.message().unwrap(),
    ///     "\"bracket\" models are not yet supported for 3D rendering\n\
    ///      Currently, only gear, box models can be visualized in 3D."
    /// );
    /// ```
    pub fn message(&self) -> Option<String> {
        let (headline, supported) = match self {
            RenderOutcome::Rendered(_) => return None,
            RenderOutcome::Unrecognized { supported } => {
                ("Unrecognized model type".to_string(), supported)
            }
            RenderOutcome::Unsupported { family, supported } => (
                format!("\"{family}\" models are not yet supported for 3D rendering"),
                supported,
            ),
        };
        Some(format!(
            "{headline}\nCurrently, only {} models can be visualized in 3D.",
            supported.join(", ")
        ))
    }
}

impl Registry {
    /// Builds the mesh for a model, or explains why there is none.
    ///
    /// A missing builder is not an error. `Err` only reports a builder
    /// whose geometry failed validation, as [`RegistryError::Mesh`].
    pub fn render(&self, info: &ModelInfo) -> Result<RenderOutcome, RegistryError> {
        let Some(builder) = self.find_builder(&info.family) else {
            let supported = self
                .supported_families()
                .into_iter()
                .map(str::to_string)
                .collect();
            if info.is_unknown() {
                return Ok(RenderOutcome::Unrecognized { supported });
            }
            warn!(family = %info.family, "no builder registered for family");
            return Ok(RenderOutcome::Unsupported {
                family: info.family.clone(),
                supported,
            });
        };

        Ok(RenderOutcome::Rendered(RenderedModel {
            family: info.family.clone(),
            mesh: builder.build(&info.parameters)?,
            material: builder.material(&info.parameters),
        }))
    }

    /// Interprets a text and renders the result.
    pub fn interpret_and_render(&self, text: &str) -> Result<RenderOutcome, RegistryError> {
        self.render(&self.interpret(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cad_mesh::{MeshError, ShapeBuilder};
    use cad_parse::Parameters;

    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    #[test]
    fn test_render_gear() {
        let outcome = registry().interpret_and_render("a gear").unwrap();
        let model = outcome.rendered().unwrap();
        assert_eq!(model.family, "gear");
        assert_eq!(model.mesh.triangle_count(), 192);
        assert_eq!(model.material.color, "#1976d2");
        assert!(outcome.message().is_none());
    }

    #[test]
    fn test_unknown_is_unrecognized() {
        let outcome = registry().render(&ModelInfo::unknown()).unwrap();
        assert!(matches!(outcome, RenderOutcome::Unrecognized { .. }));
        assert_eq!(
            outcome.message().unwrap(),
            "Unrecognized model type\n\
             Currently, only paperAirplane, gear, box, cylinder models can be visualized in 3D."
        );
    }

    #[test]
    fn test_builderless_family_is_unsupported() {
        let outcome = registry().interpret_and_render("a wall bracket").unwrap();
        match &outcome {
            RenderOutcome::Unsupported { family, supported } => {
                assert_eq!(family, "bracket");
                assert_eq!(supported.len(), 4);
            }
            other => panic!("Expected unsupported outcome, got {other:?}"),
        }
        assert!(outcome
            .message()
            .unwrap()
            .starts_with("\"bracket\" models are not yet supported for 3D rendering"));
    }

    #[test]
    fn test_bare_fallback_family_renders_with_defaults() {
        let info = ModelInfo::bare("cylinder");
        assert_eq!(info.parameters, Parameters::Empty);
        let outcome = registry().render(&info).unwrap();
        assert_eq!(outcome.rendered().unwrap().mesh.vertex_count(), 64);
    }

    #[test]
    fn test_rendered_model_json() {
        let outcome = registry().interpret_and_render("a red paper plane").unwrap();
        let json = outcome.rendered().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["family"], "paperAirplane");
        assert_eq!(value["material"]["color"], "#f44336");
        assert_eq!(value["material"]["doubleSided"], true);
        assert_eq!(value["buffers"]["positions"].as_array().unwrap().len(), 7 * 3);
        assert_eq!(value["buffers"]["normals"].as_array().unwrap().len(), 7 * 3);
        assert_eq!(value["buffers"]["indices"].as_array().unwrap().len(), 6 * 3);
    }

    /// Builder whose geometry never validates.
    struct Broken;

    impl ShapeBuilder for Broken {
        fn family(&self) -> &str {
            "box"
        }

        fn build(&self, _parameters: &Parameters) -> Result<Mesh, MeshError> {
            Err(MeshError::degenerate("zero-size box"))
        }

        fn material(&self, _parameters: &Parameters) -> Material {
            Material::for_box()
        }
    }

    #[test]
    fn test_builder_failure_is_a_mesh_error() {
        let registry = Registry::builder()
            .register_builder(Box::new(Broken))
            .build()
            .unwrap();
        let err = registry.render(&ModelInfo::bare("box")).unwrap_err();
        assert!(matches!(err, RegistryError::Mesh(MeshError::DegenerateGeometry { .. })));
    }
}
