//! Template rendering.
//!
//! Templates are Rust values implementing [`Template`], keyed by
//! [`Category`] in a [`TemplateSet`]. Each template gets a [`RenderContext`]
//! with the class metadata, the export options and the target's mappers.

use std::fmt;

use dtox_ir::{Category, DtoClass};
use indexmap::IndexMap;
use miette::Diagnostic;
use thiserror::Error;

use crate::mapping::{PathMapper, TypeMapper};

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("template '{0}' not found")]
    #[diagnostic(code(dtox::template_not_found))]
    TemplateNotFound(String),

    #[error("template '{template}' failed: {message}")]
    #[diagnostic(code(dtox::template_execution))]
    Execution { template: String, message: String },
}

/// Options forwarded to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Project name used in package imports.
    pub project_name: Option<String>,
    /// Treat classes sharing a basename as an error instead of a warning.
    pub strict_basenames: bool,
    /// Free-form options for templates.
    pub extra: IndexMap<String, String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn strict_basenames(mut self, strict: bool) -> Self {
        self.strict_basenames = strict;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

/// Everything a template can see while rendering one class.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub class: &'a DtoClass,
    pub options: &'a ExportOptions,
    pub types: TypeMapper<'a>,
    pub paths: PathMapper<'a>,
    template: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        class: &'a DtoClass,
        options: &'a ExportOptions,
        types: TypeMapper<'a>,
        paths: PathMapper<'a>,
    ) -> Self {
        Self {
            class,
            options,
            types,
            paths,
            template: "",
        }
    }

    /// Id of the template being executed.
    pub fn template_id(&self) -> &str {
        self.template
    }

    /// Classes to import, in first-use order. A class never imports itself.
    pub fn imports(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.class
            .imports
            .iter()
            .map(String::as_str)
            .filter(|path| *path != self.class.class_path)
    }

    /// The project name, required by targets that import through packages.
    pub fn project_name(&self) -> Result<&'a str, RenderError> {
        self.options
            .project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| self.execution_error("a project name is required"))
    }

    pub fn execution_error(&self, message: impl Into<String>) -> RenderError {
        RenderError::Execution {
            template: self.template.to_string(),
            message: message.into(),
        }
    }
}

/// A template producing the content of one generated file.
pub trait Template {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

impl<F> Template for F
where
    F: Fn(&RenderContext<'_>) -> Result<String, RenderError>,
{
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        self(ctx)
    }
}

/// The templates of one target, one per category.
///
/// Template ids look like `ts/standard.ts` or `dart/input.dart`.
pub struct TemplateSet {
    dir: &'static str,
    extension: &'static str,
    templates: IndexMap<Category, Box<dyn Template>>,
}

impl TemplateSet {
    pub fn new(dir: &'static str, extension: &'static str) -> Self {
        Self {
            dir,
            extension,
            templates: IndexMap::new(),
        }
    }

    /// Register the template for a category, replacing any previous one.
    pub fn with(mut self, category: Category, template: impl Template + 'static) -> Self {
        self.templates.insert(category, Box::new(template));
        self
    }

    pub fn template_id(&self, category: Category) -> String {
        format!("{}/{}.{}", self.dir, category, self.extension)
    }

    /// Render the template of `category`.
    pub fn render(&self, category: Category, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let id = self.template_id(category);
        let template = self
            .templates
            .get(&category)
            .ok_or_else(|| RenderError::TemplateNotFound(id.clone()))?;

        let ctx = RenderContext {
            template: &id,
            ..*ctx
        };
        template.render(&ctx)
    }
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.templates.keys().map(|c| self.template_id(*c)))
            .finish()
    }
}
