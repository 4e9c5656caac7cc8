//! Parsing and validation of `dto.toml`, the declarative DTO registry.
//!
//! Each `[[dto]]` entry is a [`DtoEntry`], which implements
//! [`dtox_ir::ClassHandle`] and can be handed straight to the extractor.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod dto;
mod error;
mod manifest;

pub use dto::DtoEntry;
pub use error::{Error, Result};
pub use manifest::{Manifest, ParseContext, ProjectConfig};
