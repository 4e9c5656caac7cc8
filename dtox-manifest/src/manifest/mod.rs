//! Manifest types and parsing for dto.toml files.

mod parse;
mod project;
mod validate;

pub use project::ProjectConfig;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::DtoEntry;

/// Root manifest for dto.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project settings (namespaces, default project name)
    #[serde(default)]
    pub project: ProjectConfig,

    /// Declared DTO classes, in registry order
    #[serde(default, rename = "dto")]
    pub dtos: Vec<DtoEntry>,
}

impl Manifest {
    /// Declared classes, in registry order
    pub fn classes(&self) -> impl Iterator<Item = &DtoEntry> {
        self.dtos.iter()
    }
}
