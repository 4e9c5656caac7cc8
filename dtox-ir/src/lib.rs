//! Intermediate representation for the dtox DTO exporter.
//!
//! This crate holds the language-neutral metadata model shared by every
//! stage of an export run, plus the registry interface the extractor reads.
//!
//! # Architecture
//!
//! ```text
//! dto.toml (TOML) → dtox-manifest (ClassHandle) → extractor → dtox-ir (DtoClass) → targets
//! ```
//!
//! The metadata types are:
//! - Language-agnostic (no TypeScript/Dart-specific concerns)
//! - Immutable once extracted
//! - Serializable, for `dtox list --json`

mod dto;
mod namespace;
mod source;

pub use dto::{Category, DefaultValue, DtoClass, FieldMetadata};
pub use namespace::{DEFAULT_ENTITIES, DEFAULT_ROOT, Namespaces};
pub use source::{
    ANY_MARKER, BUILT_IN_TYPES, COLLECTION_MARKER, ClassDecl, ClassHandle, FieldAnnotation,
    FieldDecl, TEMPORAL_TYPES, is_built_in,
};
