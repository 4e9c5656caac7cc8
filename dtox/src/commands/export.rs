use std::path::PathBuf;

use clap::Args;
use dtox_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, ExportRequest},
    reports::{Report, TerminalOutput, TerminalProgress},
    targets,
};

#[derive(Args)]
pub struct ExportCommand {
    /// Base directory to export the DTOs to. It must exist and be writable
    pub export_path: PathBuf,

    /// Export type, e.g. "dart" or "typescript" (defaults to [project] target, then dart)
    #[arg(short = 't', long = "type")]
    pub export_type: Option<String>,

    /// Project name, required for dart (defaults to [project] name)
    #[arg(short, long)]
    pub project_name: Option<String>,

    /// Path to dto.toml (defaults to ./dto.toml)
    #[arg(short, long, default_value = "dto.toml")]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when two DTOs share a basename instead of warning
    #[arg(long)]
    pub strict_basenames: bool,
}

impl ExportCommand {
    /// Run the export command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config);
        let registry = targets::registry();

        let request = ExportRequest {
            export_path: &self.export_path,
            export_type: self.export_type.as_deref(),
            project_name: self.project_name.as_deref(),
            dry_run: self.dry_run,
            strict_basenames: self.strict_basenames,
        };
        let project = manifest.as_ref().ok().map(|manifest| &manifest.project);
        let plan = ops::plan(project, &registry, &request).unwrap_or_exit();
        let manifest = manifest.unwrap_or_exit();

        let mut out = TerminalOutput::new();
        plan.header().render(&mut out);

        let report = ops::export(&manifest, &plan, &mut TerminalProgress).unwrap_or_exit();
        report.render(&mut out);

        Ok(())
    }
}
