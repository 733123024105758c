//! Rewrite command report data structures.

use std::path::PathBuf;

use super::{
    FailedWrite,
    output::{Output, Report},
};

/// Report data from rewriting declaration files.
#[derive(Debug)]
pub struct RewriteDtsReport {
    /// Files whose framework imports were rewritten.
    pub rewritten: Vec<PathBuf>,

    /// Number of files with nothing to rewrite.
    pub unchanged: usize,

    /// Where the core typings were copied, if requested.
    pub core_dts: Option<PathBuf>,

    /// Files that could not be read or written.
    pub failures: Vec<FailedWrite>,
}

impl RewriteDtsReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for RewriteDtsReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.path.display(), failure.error));
        }

        if !self.rewritten.is_empty() {
            out.section("Rewritten");
            for path in &self.rewritten {
                out.list_item(&path.display().to_string());
            }
        }
        out.key_value("Unchanged", &self.unchanged.to_string());
        if let Some(path) = &self.core_dts {
            out.key_value("Core typings", &path.display().to_string());
        }
    }
}
