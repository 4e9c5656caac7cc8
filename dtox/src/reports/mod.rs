//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod export;
mod list;
mod output;
mod progress;

pub use check::CheckReport;
pub use export::{ExportHeader, ExportReport, ExportResult};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
pub use progress::TerminalProgress;
