use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TypesCommand {
    /// JSON array of component metadata
    pub metadata: PathBuf,

    /// Write the type records here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TypesCommand {
    /// Run the types command
    pub fn run(&self) -> Result<()> {
        let report = ops::types(&self.metadata, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
