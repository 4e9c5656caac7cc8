//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use dtox_core::split_path;
use dtox_ir::ClassHandle;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "dto.toml")
    }
}

impl Manifest {
    /// Parse a dto.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a dto.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Only structural checks happen here. Type resolution and `list_of`
/// annotations are checked by the extractor.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for dto in &manifest.dtos {
        let path = dto.path();
        let segments = split_path(path);
        if segments.is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("class path must not be empty", Some(dto.path_span())));
        }
        for segment in segments {
            ctx.validate_name(segment, "class path segment", Some(dto.path_span()))?;
        }

        let class_ctx = ctx.push(path);
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, field) in dto.fields().iter().enumerate() {
            let span = dto.field_span(index);
            class_ctx.validate_name(&field.name, "field", span.clone())?;

            if let Some(first) = seen.insert(field.name.as_str(), index) {
                return Err(ctx.source_context().duplicate_field_error(
                    path,
                    &field.name,
                    dto.field_span(first).unwrap_or_default(),
                    span.unwrap_or_default(),
                ));
            }
        }
    }
    Ok(())
}
