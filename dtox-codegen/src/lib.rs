//! Language-neutral export machinery for dtox.
//!
//! Target crates (`dtox-codegen-typescript`, `dtox-codegen-dart`) describe
//! themselves as an [`ExportTarget`]: a type profile, a file naming function
//! and a set of templates. Everything else is shared.
//!
//! # Module Organization
//!
//! - [`extract`] - Registry declarations to [`DtoClass`](dtox_ir::DtoClass) metadata
//! - [`mapping`] - Type and path mapping (TargetProfile, TypeMapper, PathMapper)
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`render`] - Templates and their context
//! - [`target`] - Export targets and the registry dispatching to them
//! - [`export`] - The export orchestrator
//! - [`report`] - Progress reporting
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod error;
pub mod export;
pub mod extract;
pub mod mapping;
pub mod render;
pub mod report;
pub mod target;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use export::{ExportSummary, Exporter, PreviewFile};
pub use extract::Extractor;
pub use render::{ExportOptions, RenderContext, RenderError, Template, TemplateSet};
pub use report::{NoopReporter, Reporter};
pub use target::{ExportTarget, TargetRegistry};
