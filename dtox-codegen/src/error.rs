use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::render::RenderError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported export type '{name}'")]
    #[diagnostic(
        code(dtox::unsupported_export_type),
        help("available export types: {available}")
    )]
    UnsupportedExportType { name: String, available: String },

    #[error("field '{field}' of {class} must declare exactly one type, found [{types}]")]
    #[diagnostic(
        code(dtox::unsupported_field_type),
        help("union types are not supported; `null` may only be combined with one other type")
    )]
    UnsupportedFieldType {
        class: String,
        field: String,
        types: String,
    },

    #[error("{count} list_of annotations found on collection field '{field}' of {class}")]
    #[diagnostic(
        code(dtox::invalid_collection_annotation),
        help("declare the element type of an `array` field with exactly one list_of")
    )]
    InvalidCollectionAnnotation {
        class: String,
        field: String,
        count: usize,
    },

    #[error("invalid class path '{class_path}': {reason}")]
    #[diagnostic(code(dtox::invalid_class_path))]
    InvalidClassPath { class_path: String, reason: String },

    #[error("{first} and {second} both export as '{basename}'")]
    #[diagnostic(
        code(dtox::basename_collision),
        help("rename one of the classes or export without --strict-basenames")
    )]
    BasenameCollision {
        basename: String,
        first: String,
        second: String,
    },

    #[error("failed to render {class}")]
    #[diagnostic(code(dtox::render_error))]
    Render {
        class: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(dtox::write_error))]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
