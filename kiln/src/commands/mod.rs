mod completions;
mod generate;
mod rewrite_dts;
mod types;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use rewrite_dts::RewriteDtsCommand;
use types::TypesCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Scaffold web components and synthesize their type declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Types(cmd) => cmd.run(),
            Commands::RewriteDts(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate boilerplate for a new component
    #[command(alias = "g")]
    Generate(GenerateCommand),

    /// Synthesize type records from component metadata
    Types(TypesCommand),

    /// Point framework imports in declaration files at the bundled core typings
    RewriteDts(RewriteDtsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
