//! Dart templates.
//!
//! Standard and output DTOs render as immutable classes, input DTOs as
//! mutable classes. Referenced DTOs are imported through the project package.

use dtox_codegen::{
    RenderContext, RenderError,
    builder::{GENERATED_HEADER, Indent, SourceFile},
};

use crate::{
    ast::{Class, Field},
    literal::dart_literal,
    naming::field_name,
};

/// `dart/standard.dart` and `dart/output.dart`.
pub fn immutable_template(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    render_class(ctx, true)
}

/// `dart/input.dart`.
pub fn mutable_template(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    render_class(ctx, false)
}

fn render_class(ctx: &RenderContext<'_>, immutable: bool) -> Result<String, RenderError> {
    let mut class = Class::new(&ctx.class.object_name);
    if immutable {
        class = class.immutable();
    }

    for metadata in ctx.class.fields.values() {
        let ty = ctx.types.map_field(metadata);
        let mut field = Field::new(field_name(&metadata.name), ty.as_str());
        if ty.ends_with('?') || ty == ctx.types.profile().any {
            field = field.nullable();
        }
        if let Some(default) = &metadata.default_value {
            field = field.default_value(dart_literal(default));
        }
        if let Some(doc) = &metadata.description {
            field = field.doc(doc);
        }
        class = class.field(field);
    }

    Ok(file(ctx)?.push(class).render())
}

/// A file with the generated header and package imports of referenced DTOs.
fn file(ctx: &RenderContext<'_>) -> Result<SourceFile, RenderError> {
    let mut file = SourceFile::new(Indent::DART).header(GENERATED_HEADER);
    for path in ctx.imports() {
        let project = ctx.project_name()?;
        file = file.import(format!(
            "import 'package:{}/{}.dart';",
            project,
            ctx.paths.map_path(path)
        ));
    }
    Ok(file)
}
