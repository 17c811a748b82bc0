//! # Registry Errors

use cad_mesh::MeshError;
use cad_parse::ParseError;
use thiserror::Error;

/// Errors raised while assembling a registry or rendering through it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A classifier or fallback pattern failed to compile
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A builder produced unusable geometry
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// JSON export failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
