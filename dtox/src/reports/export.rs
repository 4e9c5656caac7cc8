//! Export command report data structures.

use std::path::{Path, PathBuf};

use dtox_codegen::{ExportSummary, PreviewFile};

use super::output::{Output, Report};

/// What is about to be exported, printed before the run starts.
#[derive(Debug)]
pub struct ExportHeader {
    pub export_type: String,
    pub export_path: PathBuf,
    pub project_name: Option<String>,
}

impl Report for ExportHeader {
    fn render(&self, out: &mut dyn Output) {
        out.title("DTO export");
        out.key_value("Type", &self.export_type);
        out.key_value("Export path", &self.export_path.display().to_string());
        if let Some(name) = &self.project_name {
            out.key_value("Project name", name);
        }
        out.newline();
    }
}

/// Report data from an export run.
#[derive(Debug)]
pub struct ExportReport {
    pub export_path: PathBuf,
    pub result: ExportResult,
}

/// Result of an export run.
#[derive(Debug)]
pub enum ExportResult {
    /// Files were written to disk.
    Written(ExportSummary),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for ExportReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            ExportResult::Written(summary) => self.render_written(out, summary),
            ExportResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ExportReport {
    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.export_path).unwrap_or(path)
    }

    fn render_written(&self, out: &mut dyn Output, summary: &ExportSummary) {
        out.newline();
        out.section(&format!("Generated ({})", summary.files.len()));
        for file in &summary.files {
            out.added_item(&self.relative(file).display().to_string());
        }
        out.newline();
        out.preformatted(&format!(
            "✓ DTOs exported to {} ({} bytes)",
            self.export_path.display(),
            summary.bytes_written
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&self.relative(&file.path).display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
