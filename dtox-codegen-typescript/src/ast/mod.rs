//! TypeScript AST builders for the declarations dtox generates.
//!
//! These render through [`CodeBuilder`](dtox_codegen::builder::CodeBuilder)
//! via the [`Renderable`](dtox_codegen::builder::Renderable) trait.

mod class;
mod imports;
mod interface;

pub use class::{Class, ClassField};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
