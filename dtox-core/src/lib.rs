//! Core utilities for the dtox DTO exporter.
//!
//! This crate provides the string helpers and the filesystem abstraction
//! shared by every other dtox crate.

mod file;
mod utils;

// File operations
pub use file::{DiskFs, Filesystem, MemoryFs};
// String utilities
pub use utils::{
    PATH_SEPARATORS, basename, lowercase_first, relative_module_path, split_path, to_snake_case,
};
