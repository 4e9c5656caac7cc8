//! TypeScript export target for dtox.
//!
//! Standard and output DTOs become `export interface` declarations, input
//! DTOs become `export class` declarations with property initializers.
//! Referenced DTOs are imported with `import type`.
//!
//! ```
//! use std::path::Path;
//!
//! use dtox_codegen::{ExportOptions, Exporter};
//! use dtox_ir::{ClassDecl, FieldDecl, Namespaces};
//!
//! let registry = vec![ClassDecl::new("App.DTO.User").field(FieldDecl::new("name", "string"))];
//! let files = Exporter::new(Namespaces::default())
//!     .preview(&registry, &dtox_codegen_typescript::target(), Path::new("out"), &ExportOptions::new())
//!     .unwrap();
//!
//! assert!(files[0].path.ends_with("user.ts"));
//! assert!(files[0].content.contains("export interface User {"));
//! ```

pub mod ast;
mod literal;
mod profile;
mod templates;

use dtox_codegen::{ExportTarget, TemplateSet};
use dtox_core::lowercase_first;
use dtox_ir::Category;

pub use literal::ts_literal;
pub use profile::TS_PROFILE;
pub use templates::{class_template, interface_template};

/// The TypeScript target, selected with `typescript` or `ts`.
pub fn target() -> ExportTarget {
    ExportTarget {
        name: "typescript",
        aliases: &["ts"],
        extension: "ts",
        requires_project_name: false,
        profile: TS_PROFILE,
        file_naming: lowercase_first,
        templates: TemplateSet::new("ts", "ts")
            .with(Category::Standard, interface_template)
            .with(Category::Input, class_template)
            .with(Category::Output, interface_template),
    }
}
