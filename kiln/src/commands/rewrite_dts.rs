use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_config::KilnToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, RewriteOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RewriteDtsCommand {
    /// Declaration files to rewrite in place
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Core typings to copy into the types directory
    #[arg(long)]
    pub core_dts: Option<PathBuf>,

    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,
}

impl RewriteDtsCommand {
    /// Run the rewrite-dts command
    pub fn run(&self) -> Result<()> {
        let kiln_toml = KilnToml::open(&self.config).unwrap_or_exit();
        let types_dir = kiln_toml.types_dir().unwrap_or_exit();

        let report = ops::rewrite_dts(RewriteOptions {
            types_dir: &types_dir,
            files: &self.files,
            core_dts: self.core_dts.as_deref(),
        })?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
