//! Source namespaces that scope the exported domain.

use dtox_core::split_path;

/// Default root namespace of exportable DTOs.
pub const DEFAULT_ROOT: &str = "App.DTO";

/// Default namespace of entity classes.
pub const DEFAULT_ENTITIES: &str = "App.Entity";

/// Root and entity namespaces, stored as path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    root: Vec<String>,
    entities: Vec<String>,
}

impl Namespaces {
    pub fn new(root: &str, entities: &str) -> Self {
        Self {
            root: split_path(root).into_iter().map(String::from).collect(),
            entities: split_path(entities).into_iter().map(String::from).collect(),
        }
    }

    pub fn root(&self) -> &[String] {
        &self.root
    }

    /// Check if a type path belongs to the source domain (starts with the root namespace).
    pub fn in_domain(&self, type_path: &str) -> bool {
        starts_with(&split_path(type_path), &self.root)
    }

    /// Check if a type path references an entity.
    pub fn is_entity(&self, type_path: &str) -> bool {
        starts_with(&split_path(type_path), &self.entities)
    }

    /// Check if a type path references a DTO: in the domain, but not an entity.
    pub fn is_dto(&self, type_path: &str) -> bool {
        self.in_domain(type_path) && !self.is_entity(type_path)
    }

    /// Segments of a class path with the root namespace removed.
    ///
    /// Paths outside the root namespace are returned whole.
    pub fn strip_root<'a>(&self, class_path: &'a str) -> Vec<&'a str> {
        let segments = split_path(class_path);
        if starts_with(&segments, &self.root) {
            segments[self.root.len()..].to_vec()
        } else {
            segments
        }
    }

    /// The path segment right after the root namespace (the third segment for `App.DTO`).
    pub fn package_of<'a>(&self, class_path: &'a str) -> Option<&'a str> {
        split_path(class_path).get(self.root.len()).copied()
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_ENTITIES)
    }
}

fn starts_with(segments: &[&str], prefix: &[String]) -> bool {
    !prefix.is_empty()
        && segments.len() > prefix.len()
        && segments.iter().zip(prefix).all(|(a, b)| *a == b.as_str())
}
