mod check;
mod completions;
mod export;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use export::ExportCommand;
use list::ListCommand;

use crate::error::CliError;

/// Extension trait for exiting on errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E: Into<CliError>> UnwrapOrExit<T> for std::result::Result<T, E> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let err: CliError = e.into();
                let code = err.exit_code();
                eprintln!("{:?}", miette::Report::new(err));
                std::process::exit(code);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dtox")]
#[command(version)]
#[command(about = "Export DTO declarations as TypeScript and Dart types")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Export(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Export every DTO of dto.toml to the given directory
    Export(ExportCommand),

    /// Validate dto.toml without writing anything
    Check(CheckCommand),

    /// List the extracted DTO metadata
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
