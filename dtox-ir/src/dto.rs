//! Normalized DTO metadata produced by the extractor.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Classification of a DTO, driving its output directory and template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Standard,
    Input,
    Output,
}

impl Category {
    /// All categories, in template lookup order.
    pub const ALL: [Category; 3] = [Category::Standard, Category::Input, Category::Output];

    /// Classify a class path by case-insensitive substring match.
    ///
    /// "input" is tested first and "output" second, so a path containing both
    /// is an output DTO.
    pub fn of(class_path: &str) -> Self {
        let lower = class_path.to_lowercase();
        let mut category = Category::Standard;
        if lower.contains("input") {
            category = Category::Input;
        }
        if lower.contains("output") {
            category = Category::Output;
        }
        category
    }

    /// Category identifier (used in template ids).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Input => "input",
            Category::Output => "output",
        }
    }

    /// Output directory name, `None` for standard DTOs.
    pub fn directory(&self) -> Option<&'static str> {
        match self {
            Category::Standard => None,
            Category::Input => Some("Input"),
            Category::Output => Some("Output"),
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Category::Standard)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A default value declared on a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<DefaultValue>),
}

/// Metadata for one public field of a DTO.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMetadata {
    pub name: String,
    /// Raw source type: a primitive keyword, a class path or the collection marker.
    pub declared_type: String,
    pub is_nullable: bool,
    /// True for primitive/scalar types, false for class types.
    pub is_built_in: bool,
    pub default_value: Option<DefaultValue>,
    /// Element type, present only when `declared_type` is the collection marker.
    pub list_element_type: Option<String>,
    pub description: Option<String>,
}

impl FieldMetadata {
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn is_collection(&self) -> bool {
        self.declared_type == crate::COLLECTION_MARKER
    }
}

/// Metadata for one exportable DTO class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DtoClass {
    /// Fully qualified source identifier, as declared.
    pub class_path: String,
    /// Class path without the root namespace, `/`-joined.
    pub abstract_path: String,
    /// Short name (last path segment).
    pub object_name: String,
    pub category: Category,
    /// Non-empty only for input and output DTOs.
    pub package: String,
    /// Class paths of referenced DTOs from the source domain, deduplicated in insertion order.
    pub imports: IndexSet<String>,
    /// Fields in declaration order.
    pub fields: IndexMap<String, FieldMetadata>,
}

impl DtoClass {
    /// Output subdirectory relative to the export root (`<package>/<Category>`), `None` for standard DTOs.
    pub fn subdirectory(&self) -> Option<String> {
        self.category
            .directory()
            .map(|dir| format!("{}/{}", self.package, dir))
    }
}
