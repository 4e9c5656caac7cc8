//! Core operations.
//!
//! This module contains the business logic for dtox commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod export;

pub use check::{check, extract};
pub use export::{ExportRequest, export, plan};
