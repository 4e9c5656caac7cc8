//! Export operation - validation of the command line, then the export run.

use std::path::{Path, PathBuf};

use dtox_codegen::{ExportOptions, ExportTarget, Exporter, Reporter, TargetRegistry};
use dtox_manifest::{Manifest, ProjectConfig};

use crate::{
    error::CliError,
    reports::{ExportHeader, ExportReport, ExportResult},
    targets::DEFAULT_EXPORT_TYPE,
};

/// What the user asked for on the command line.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub export_path: &'a Path,
    /// `--type`, falls back to `[project] target`.
    pub export_type: Option<&'a str>,
    /// `--project-name`, falls back to `[project] name`.
    pub project_name: Option<&'a str>,
    pub dry_run: bool,
    pub strict_basenames: bool,
}

/// A validated request, ready to run.
#[derive(Debug)]
pub struct ExportPlan<'r> {
    pub target: &'r ExportTarget,
    /// Absolute export root.
    pub export_path: PathBuf,
    pub options: ExportOptions,
    pub dry_run: bool,
}

impl ExportPlan<'_> {
    pub fn header(&self) -> ExportHeader {
        ExportHeader {
            export_type: self.target.name.to_string(),
            export_path: self.export_path.clone(),
            project_name: self.options.project_name.clone(),
        }
    }
}

/// Validate a request. Nothing is written.
///
/// Checks run in order: export path, export type, project name. The project
/// config only supplies fallbacks, so a manifest that failed to load is `None`
/// here and its error is reported after these checks.
pub fn plan<'r>(
    project: Option<&ProjectConfig>,
    registry: &'r TargetRegistry,
    request: &ExportRequest<'_>,
) -> Result<ExportPlan<'r>, CliError> {
    let export_path = validate_export_path(request.export_path)?;

    let export_type = request
        .export_type
        .or_else(|| project.and_then(|p| p.target.as_deref()))
        .unwrap_or(DEFAULT_EXPORT_TYPE);
    let target = registry.get(export_type)?;
    tracing::debug!(export_type = target.name, "resolved export type");

    let project_name = resolve_project_name(target, request.project_name, project)?;
    let mut options = ExportOptions::new().strict_basenames(request.strict_basenames);
    if let Some(name) = project_name {
        options = options.with_project_name(name);
    }

    Ok(ExportPlan {
        target,
        export_path,
        options,
        dry_run: request.dry_run,
    })
}

/// Run a validated plan over every class of the manifest.
pub fn export(
    manifest: &Manifest,
    plan: &ExportPlan<'_>,
    reporter: &mut dyn Reporter,
) -> Result<ExportReport, CliError> {
    let mut exporter = Exporter::new(manifest.project.namespaces()).with_reporter(reporter);

    let result = if plan.dry_run {
        let files = exporter.preview(
            &manifest.dtos,
            plan.target,
            &plan.export_path,
            &plan.options,
        )?;
        ExportResult::Preview(files)
    } else {
        let summary = exporter.run(
            &manifest.dtos,
            plan.target,
            &plan.export_path,
            &plan.options,
        )?;
        ExportResult::Written(summary)
    };

    Ok(ExportReport {
        export_path: plan.export_path.clone(),
        result,
    })
}

/// The export path must be an existing, writable directory. Returns it made absolute.
pub fn validate_export_path(path: &Path) -> Result<PathBuf, CliError> {
    let invalid = |reason: &'static str| CliError::InvalidExportPath {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = std::fs::metadata(path).map_err(|_| invalid("does not exist"))?;
    if !metadata.is_dir() {
        return Err(invalid("is not a directory"));
    }
    if metadata.permissions().readonly() {
        return Err(invalid("is not writable"));
    }
    std::path::absolute(path).map_err(|_| invalid("cannot be made absolute"))
}

/// Project name from the command line or `[project] name`.
///
/// Blank names count as missing. Fails only for targets that need one.
pub fn resolve_project_name(
    target: &ExportTarget,
    flag: Option<&str>,
    project: Option<&ProjectConfig>,
) -> Result<Option<String>, CliError> {
    let name = flag
        .or_else(|| project.and_then(|p| p.name.as_deref()))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);

    if name.is_none() && target.requires_project_name {
        return Err(CliError::MissingProjectName {
            export_type: target.name.to_string(),
        });
    }
    Ok(name)
}
