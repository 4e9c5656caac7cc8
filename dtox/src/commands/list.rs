use std::path::PathBuf;

use clap::Args;
use dtox_manifest::Manifest;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{ListReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to dto.toml (defaults to ./dto.toml)
    #[arg(short, long, default_value = "dto.toml")]
    pub config: PathBuf,

    /// Print the metadata as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let classes = ops::extract(&manifest).unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&classes).wrap_err("Failed to serialize metadata")?;
            println!("{}", json);
        } else {
            ListReport { classes }.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
