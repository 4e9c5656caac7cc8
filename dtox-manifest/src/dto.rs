//! `[[dto]]` entries: the declared classes of the registry.

use std::ops::Range;

use dtox_ir::{ClassHandle, DefaultValue, FieldAnnotation, FieldDecl};
use serde::Deserialize;
use toml::Spanned;

/// One declared DTO class.
///
/// ```toml
/// [[dto]]
/// path = "App.DTO.User"
///
/// [[dto.fields]]
/// name = "email"
/// type = "?string"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawDto")]
pub struct DtoEntry {
    path: Spanned<String>,
    fields: Vec<FieldDecl>,
    field_spans: Vec<Range<usize>>,
}

impl DtoEntry {
    /// Declared class path.
    pub fn path(&self) -> &str {
        self.path.get_ref()
    }

    /// Source span of the class path.
    pub fn path_span(&self) -> Range<usize> {
        self.path.span()
    }

    /// Source span of the name of the field at `index`.
    pub fn field_span(&self, index: usize) -> Option<Range<usize>> {
        self.field_spans.get(index).cloned()
    }
}

impl ClassHandle for DtoEntry {
    fn class_path(&self) -> &str {
        self.path.get_ref()
    }

    fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDto {
    path: Spanned<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

/// Field as written in the manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: Spanned<String>,
    #[serde(rename = "type")]
    ty: OneOrMany,
    #[serde(default)]
    nullable: bool,
    default: Option<toml::Value>,
    list_of: Option<OneOrMany>,
    description: Option<String>,
}

/// A string or an array of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

impl TryFrom<RawDto> for DtoEntry {
    type Error = String;

    fn try_from(raw: RawDto) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(raw.fields.len());
        let mut field_spans = Vec::with_capacity(raw.fields.len());

        for field in raw.fields {
            field_spans.push(field.name.span());
            fields.push(field.into_decl()?);
        }

        Ok(Self {
            path: raw.path,
            fields,
            field_spans,
        })
    }
}

impl RawField {
    fn into_decl(self) -> Result<FieldDecl, String> {
        let name = self.name.into_inner();
        let mut nullable = self.nullable;

        // `a|b` and `["a", "b"]` both declare several types; `?a` is shorthand for nullable
        let types = match self.ty {
            OneOrMany::One(s) => s
                .split('|')
                .map(|t| t.trim().to_string())
                .collect::<Vec<_>>(),
            OneOrMany::Many(v) => v,
        };
        let types = types
            .into_iter()
            .map(|t| match t.strip_prefix('?') {
                Some(rest) => {
                    nullable = true;
                    rest.to_string()
                }
                None => t,
            })
            .collect();

        let default = self
            .default
            .map(|value| default_from_toml(&value))
            .transpose()
            .map_err(|e| format!("field '{}': {}", name, e))?;

        let mut annotations: Vec<FieldAnnotation> = self
            .list_of
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(FieldAnnotation::ListOf)
            .collect();
        if let Some(description) = self.description {
            annotations.push(FieldAnnotation::Description(description));
        }

        Ok(FieldDecl {
            name,
            types,
            nullable,
            default,
            annotations,
        })
    }
}

/// Convert a TOML default into a [`DefaultValue`].
fn default_from_toml(value: &toml::Value) -> Result<DefaultValue, String> {
    match value {
        toml::Value::String(s) => Ok(DefaultValue::String(s.clone())),
        toml::Value::Integer(i) => Ok(DefaultValue::Int(*i)),
        toml::Value::Float(f) => Ok(DefaultValue::Float(*f)),
        toml::Value::Boolean(b) => Ok(DefaultValue::Bool(*b)),
        toml::Value::Array(items) => items
            .iter()
            .map(default_from_toml)
            .collect::<Result<Vec<_>, _>>()
            .map(DefaultValue::List),
        toml::Value::Datetime(_) => Err("datetime defaults are not supported".to_string()),
        toml::Value::Table(_) => Err("table defaults are not supported".to_string()),
    }
}
