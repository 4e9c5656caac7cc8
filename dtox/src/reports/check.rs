//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of standard DTOs.
    pub standard: usize,
    /// Number of input DTOs.
    pub input: usize,
    /// Number of output DTOs.
    pub output: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn class_count(&self) -> usize {
        self.standard + self.input + self.output
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let count = self.class_count();
        out.preformatted(&format!(
            "  {} class{} ({} standard, {} input, {} output)",
            count,
            if count == 1 { "" } else { "es" },
            self.standard,
            self.input,
            self.output
        ));
    }
}
