//! Dart export target for dtox.
//!
//! Standard and output DTOs become immutable classes (`final` fields and a
//! `const` constructor), input DTOs become mutable classes. Files are named
//! in snake_case and referenced DTOs are imported as
//! `package:<project>/<path>.dart`, so the target needs a project name.
//!
//! ```
//! use std::path::Path;
//!
//! use dtox_codegen::{ExportOptions, Exporter};
//! use dtox_ir::{ClassDecl, FieldDecl, Namespaces};
//!
//! let registry = vec![
//!     ClassDecl::new("Domain.Billing.Input.CreateInvoice").field(FieldDecl::new("amount", "float")),
//! ];
//! let files = Exporter::new(Namespaces::new("Domain", "Domain.Entity"))
//!     .preview(
//!         &registry,
//!         &dtox_codegen_dart::target(),
//!         Path::new("out"),
//!         &ExportOptions::new().with_project_name("shop"),
//!     )
//!     .unwrap();
//!
//! assert!(files[0].path.ends_with("Billing/Input/create_invoice.dart"));
//! assert!(files[0].content.contains("  double amount;\n"));
//! ```

pub mod ast;
mod literal;
mod naming;
mod profile;
mod templates;

use dtox_codegen::{ExportTarget, TemplateSet};
use dtox_core::to_snake_case;
use dtox_ir::Category;

pub use literal::dart_literal;
pub use naming::{DART_RESERVED, field_name};
pub use profile::DART_PROFILE;
pub use templates::{immutable_template, mutable_template};

/// The Dart target, selected with `dart`.
pub fn target() -> ExportTarget {
    ExportTarget {
        name: "dart",
        aliases: &[],
        extension: "dart",
        requires_project_name: true,
        profile: DART_PROFILE,
        file_naming: to_snake_case,
        templates: TemplateSet::new("dart", "dart")
            .with(Category::Standard, immutable_template)
            .with(Category::Input, mutable_template)
            .with(Category::Output, immutable_template),
    }
}
