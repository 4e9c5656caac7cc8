//! Test utilities for export targets.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use dtox_core::lowercase_first;
use dtox_ir::{Category, ClassDecl, DefaultValue, FieldDecl};

use crate::{
    mapping::TargetProfile,
    render::{RenderContext, RenderError, TemplateSet},
    report::Reporter,
    target::ExportTarget,
};

fn list(element: &str) -> String {
    format!("{}[]", element)
}

fn nullable(ty: &str) -> String {
    format!("{} | null", ty)
}

/// A small TypeScript-like profile.
pub const TEST_PROFILE: TargetProfile = TargetProfile {
    primitives: &[
        ("string", "string"),
        ("int", "number"),
        ("float", "number"),
        ("bool", "boolean"),
    ],
    temporal: "Date",
    any: "any",
    entity_reference: "string",
    list,
    nullable,
    nullable_elements: false,
};

fn describe(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    Ok(format!("{} {}\n", ctx.class.category, ctx.class.class_path))
}

/// A target whose templates write `<category> <class path>`.
pub fn test_target() -> ExportTarget {
    ExportTarget {
        name: "test",
        aliases: &[],
        extension: "ts",
        requires_project_name: false,
        profile: TEST_PROFILE,
        file_naming: lowercase_first,
        templates: TemplateSet::new("test", "ts")
            .with(Category::Standard, describe)
            .with(Category::Input, describe)
            .with(Category::Output, describe),
    }
}

/// One class of each category under the default `App.DTO` root.
pub fn sample_registry() -> Vec<ClassDecl> {
    vec![
        ClassDecl::new("App.DTO.User")
            .field(FieldDecl::new("name", "string"))
            .field(FieldDecl::new("email", "string").nullable()),
        ClassDecl::new("App.DTO.Billing.Input.CreateInvoiceInput")
            .field(FieldDecl::new("amount", "float"))
            .field(
                FieldDecl::new("currency", "string")
                    .default_value(DefaultValue::String("EUR".into())),
            )
            .field(FieldDecl::new("customer", "App.DTO.User")),
        ClassDecl::new("App.DTO.Billing.Output.InvoiceOutput")
            .field(FieldDecl::new("id", "App.Entity.Invoice"))
            .field(FieldDecl::new("lines", "array").list_of("string")),
    ]
}

/// Records every reported step.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub steps: Vec<(usize, usize, String)>,
}

impl Reporter for RecordingReporter {
    fn step(&mut self, current: usize, total: usize, message: &str) {
        self.steps.push((current, total, message.to_string()));
    }
}
