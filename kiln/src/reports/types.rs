//! Types command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from type synthesis.
#[derive(Debug)]
pub struct TypesReport {
    /// Number of components processed.
    pub component_count: usize,

    /// Number of identifiers re-exported under a suffixed name.
    pub renamed_count: usize,

    /// Where the JSON went.
    pub destination: TypesDestination,
}

/// Where synthesized type records are emitted.
#[derive(Debug)]
pub enum TypesDestination {
    /// Printed as is.
    Stdout(String),

    /// Written to a file.
    File(PathBuf),
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.destination {
            TypesDestination::Stdout(json) => out.preformatted(json),
            TypesDestination::File(path) => {
                out.preformatted(&format!(
                    "✓ wrote types for {} component{} to {}",
                    self.component_count,
                    if self.component_count == 1 { "" } else { "s" },
                    path.display()
                ));
                if self.renamed_count > 0 {
                    out.key_value("  renamed identifiers", &self.renamed_count.to_string());
                }
            }
        }
    }
}
