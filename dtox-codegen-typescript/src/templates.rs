//! TypeScript templates.
//!
//! Standard and output DTOs render as interfaces, input DTOs as classes
//! whose properties carry their declared defaults.

use dtox_codegen::{
    RenderContext, RenderError,
    builder::{GENERATED_HEADER, Indent, SourceFile},
};

use crate::{
    ast::{Class, ClassField, Import, Interface, InterfaceField},
    literal::ts_literal,
};

/// `ts/standard.ts` and `ts/output.ts`.
pub fn interface_template(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let class = ctx.class;
    let interface = class.fields.values().fold(
        Interface::new(&class.object_name),
        |interface, field| {
            let mut f = InterfaceField::new(&field.name, ctx.types.map_field(field));
            if let Some(doc) = &field.description {
                f = f.doc(doc);
            }
            interface.field_with(f)
        },
    );

    Ok(file(ctx).push(interface).render())
}

/// `ts/input.ts`.
pub fn class_template(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let class = ctx.class;
    let ts_class = class
        .fields
        .values()
        .fold(Class::new(&class.object_name), |ts_class, field| {
            let mut f = ClassField::new(&field.name, ctx.types.map_field(field));
            if let Some(default) = &field.default_value {
                f = f.initializer(ts_literal(default));
            } else if field.is_nullable {
                f = f.initializer("null");
            }
            if let Some(doc) = &field.description {
                f = f.doc(doc);
            }
            ts_class.field(f)
        });

    Ok(file(ctx).push(ts_class).render())
}

/// A file with the generated header and type-only imports of referenced DTOs.
fn file(ctx: &RenderContext<'_>) -> SourceFile {
    ctx.imports()
        .fold(
            SourceFile::new(Indent::TYPESCRIPT).header(GENERATED_HEADER),
            |file, path| {
                let import = Import::new(ctx.paths.relative_import(&ctx.class.class_path, path))
                    .named(ctx.types.map_type(path, None))
                    .type_only();
                file.import(import.build())
            },
        )
}
