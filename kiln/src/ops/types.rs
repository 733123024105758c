//! Types operation - type record synthesis from component metadata.

use std::path::Path;

use eyre::{Context, Result};
use kiln_core::File;
use kiln_ir::ComponentMeta;
use kiln_types::synthesize;

use crate::reports::{TypesDestination, TypesReport};

/// Execute the types operation.
///
/// Reads a JSON array of component metadata and synthesizes type records for
/// all of it with a single registry. The JSON result goes to `output` when
/// given, otherwise it is carried in the report for printing.
pub fn types(metadata_path: &Path, output: Option<&Path>) -> Result<TypesReport> {
    let content = std::fs::read_to_string(metadata_path)
        .wrap_err_with(|| format!("Failed to read {}", metadata_path.display()))?;
    let components: Vec<ComponentMeta> = serde_json::from_str(&content).wrap_err_with(|| {
        format!(
            "Failed to parse component metadata in {}",
            metadata_path.display()
        )
    })?;

    let synthesis = synthesize(&components);
    let renamed_count = synthesis
        .imports
        .iter()
        .flat_map(|(_, aliases)| aliases)
        .filter(|alias| alias.local_name != alias.import_name)
        .count();

    let json =
        serde_json::to_string_pretty(&synthesis).wrap_err("Failed to serialize type records")?;

    let destination = match output {
        Some(path) => {
            File::new(path, format!("{json}\n")).write()?;
            TypesDestination::File(path.to_path_buf())
        }
        None => TypesDestination::Stdout(json),
    };

    Ok(TypesReport {
        component_count: synthesis.components.len(),
        renamed_count,
        destination,
    })
}
