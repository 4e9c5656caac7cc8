use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for a missing, non-directory or read-only export path.
pub const EXIT_INVALID_EXPORT_PATH: i32 = 10;
/// Exit code for a target that needs a project name when none was given.
pub const EXIT_MISSING_PROJECT_NAME: i32 = 11;
/// Exit code for an unknown `--type`.
pub const EXIT_UNSUPPORTED_EXPORT_TYPE: i32 = 12;

/// Errors surfaced by the command line, each mapped to an exit code.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("export path '{path}' {reason}")]
    #[diagnostic(
        code(dtox::invalid_export_path),
        help("pass an existing, writable directory")
    )]
    InvalidExportPath { path: PathBuf, reason: &'static str },

    #[error("export type '{export_type}' requires a project name")]
    #[diagnostic(
        code(dtox::missing_project_name),
        help("pass --project-name (-p) or set `name` in the [project] table of dto.toml")
    )]
    MissingProjectName { export_type: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] Box<dtox_manifest::Error>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] dtox_codegen::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidExportPath { .. } => EXIT_INVALID_EXPORT_PATH,
            CliError::MissingProjectName { .. } => EXIT_MISSING_PROJECT_NAME,
            CliError::Export(dtox_codegen::Error::UnsupportedExportType { .. }) => {
                EXIT_UNSUPPORTED_EXPORT_TYPE
            }
            CliError::Manifest(_) | CliError::Export(_) => 1,
        }
    }
}
