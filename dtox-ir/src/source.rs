//! Registry interface: the declarations the extractor reads.
//!
//! A [`ClassHandle`] describes one exportable class the way it was declared,
//! before any invariant is checked. The manifest crate implements it for
//! `dto.toml` entries and [`ClassDecl`] implements it for declarations built
//! in Rust code.

use crate::DefaultValue;

/// Source type used as the collection marker.
pub const COLLECTION_MARKER: &str = "array";

/// Source type used as the catch-all marker.
pub const ANY_MARKER: &str = "mixed";

/// Source types considered built-in (scalar) rather than class types.
pub const BUILT_IN_TYPES: &[&str] = &[
    "string", "int", "integer", "float", "double", "bool", "boolean", "array", "mixed", "null",
    "object", "iterable", "callable",
];

/// Class types mapped to a target date/time type, matched on their basename.
pub const TEMPORAL_TYPES: &[&str] = &["DateTime", "DateTimeImmutable", "DateTimeInterface"];

/// Check if a source type is built-in.
pub fn is_built_in(ty: &str) -> bool {
    BUILT_IN_TYPES.contains(&ty)
}

/// A declarative marker attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// Element type of a collection field.
    ListOf(String),
    /// Human readable description, rendered as a doc comment.
    Description(String),
}

/// A field as declared, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    /// Declared types. Exactly one (optionally alongside `null`) is valid.
    pub types: Vec<String>,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub annotations: Vec<FieldAnnotation>,
}

impl FieldDecl {
    /// A field with a single declared type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: vec![ty.into()],
            nullable: false,
            default: None,
            annotations: Vec::new(),
        }
    }

    /// A field declared with several types at once.
    pub fn union(name: impl Into<String>, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            nullable: false,
            default: None,
            annotations: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Attach a `ListOf` annotation.
    pub fn list_of(mut self, element: impl Into<String>) -> Self {
        self.annotations.push(FieldAnnotation::ListOf(element.into()));
        self
    }

    /// Attach a description annotation.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.annotations
            .push(FieldAnnotation::Description(text.into()));
        self
    }

    /// Element types from every `ListOf` annotation, in declaration order.
    pub fn list_of_annotations(&self) -> Vec<&str> {
        self.annotations
            .iter()
            .filter_map(|a| match a {
                FieldAnnotation::ListOf(ty) => Some(ty.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first description annotation, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            FieldAnnotation::Description(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// An exportable class supplied by the registry.
pub trait ClassHandle {
    /// Fully qualified class path (namespace + short name).
    fn class_path(&self) -> &str;

    /// Public fields in declaration order.
    fn fields(&self) -> &[FieldDecl];
}

/// A class declared directly in Rust.
///
/// ```
/// use dtox_ir::{ClassDecl, ClassHandle, FieldDecl};
///
/// let user = ClassDecl::new("App.DTO.User")
///     .field(FieldDecl::new("name", "string"))
///     .field(FieldDecl::new("friends", "array").list_of("App.DTO.User"));
///
/// assert_eq!(user.class_path(), "App.DTO.User");
/// assert_eq!(user.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub path: String,
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

impl ClassHandle for ClassDecl {
    fn class_path(&self) -> &str {
        &self.path
    }

    fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_built_in() {
        assert!(is_built_in("string"));
        assert!(is_built_in("array"));
        assert!(is_built_in("mixed"));
        assert!(!is_built_in("DateTime"));
        assert!(!is_built_in("App.DTO.User"));
    }

    #[test]
    fn test_field_decl_annotations() {
        let field = FieldDecl::new("tags", "array")
            .description("Tags")
            .list_of("string")
            .list_of("int");

        assert_eq!(field.list_of_annotations(), vec!["string", "int"]);
        assert_eq!(field.description_text(), Some("Tags"));
    }

    #[test]
    fn test_union_decl() {
        let field = FieldDecl::union("id", ["int", "string"]);
        assert_eq!(field.types, vec!["int".to_string(), "string".to_string()]);
        assert!(!field.nullable);
    }
}
