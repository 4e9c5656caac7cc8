//! Dart AST builders for the declarations dtox generates.

mod class;

pub use class::{Class, Field};
