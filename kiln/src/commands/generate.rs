use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use eyre::{Context, Result};
use kiln_config::{KilnToml, validate_tag};
use kiln_scaffold::{Extension, ScaffoldPlan, component_tag};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Component tag, optionally under sub-directories (e.g. forms/my-input)
    pub tag: Option<String>,

    /// Extra files to generate: css, spec.tsx, e2e.ts (prompts when omitted)
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    pub files: Option<Vec<Extension>>,

    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let kiln_toml = KilnToml::open(&self.config).unwrap_or_exit();
        let src_dir = kiln_toml.src_dir().unwrap_or_exit();

        let input = match &self.tag {
            Some(tag) => tag.clone(),
            None => Self::prompt_tag()?,
        };
        validate_tag(&component_tag(&input)).unwrap_or_exit();

        let extras = match &self.files {
            Some(files) => files.clone(),
            None => Self::prompt_extensions()?,
        };

        let plan = ScaffoldPlan::new(&src_dir, &input, &extras);
        let report = ops::generate(&plan, &input, kiln_toml.root_dir())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn prompt_tag() -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Component tag name (dash-case)")
            .interact_text()
            .wrap_err("Failed to read component tag")
    }

    fn prompt_extensions() -> Result<Vec<Extension>> {
        let items: Vec<&str> = Extension::OPTIONAL.iter().map(Extension::title).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Which additional files do you want to generate?")
            .items(&items)
            .defaults(&[true; Extension::OPTIONAL.len()])
            .interact()
            .wrap_err("Failed to get file selection")?;

        Ok(selection
            .into_iter()
            .map(|index| Extension::OPTIONAL[index])
            .collect())
    }
}
