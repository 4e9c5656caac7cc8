use dtox_ir::{DEFAULT_ENTITIES, DEFAULT_ROOT, Namespaces};
use serde::Deserialize;

/// `[project]` settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used when `--project-name` is not given
    pub name: Option<String>,

    /// Default export type, used when `--type` is not given
    pub target: Option<String>,

    /// Root namespace of the exported DTOs
    #[serde(default = "default_root")]
    pub root: String,

    /// Namespace of entity classes, exported as opaque strings
    #[serde(default = "default_entities")]
    pub entities: String,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_entities() -> String {
    DEFAULT_ENTITIES.to_string()
}

impl ProjectConfig {
    /// Namespaces scoping the exported domain
    pub fn namespaces(&self) -> Namespaces {
        Namespaces::new(&self.root, &self.entities)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            target: None,
            root: default_root(),
            entities: default_entities(),
        }
    }
}
