//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`SourceFile`] - Composition of header, imports and body
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;
mod source_file;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use source_file::{GENERATED_HEADER, SourceFile};
