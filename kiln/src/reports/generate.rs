//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from scaffolding a component.
#[derive(Debug)]
pub struct GenerateReport {
    /// The tag argument as given by the user.
    pub input: String,

    /// What happened on disk.
    pub result: GenerateResult,
}

impl GenerateReport {
    /// Whether every file was written.
    pub fn is_success(&self) -> bool {
        matches!(self.result, GenerateResult::Written(_))
    }
}

/// Result of scaffolding, with paths relative to the project root.
#[derive(Debug)]
pub enum GenerateResult {
    /// All files were written.
    Written(Vec<PathBuf>),

    /// Nothing was written because these files already exist.
    Existing(Vec<PathBuf>),

    /// Some writes failed. Files that did get written are left in place.
    Failed {
        written: Vec<PathBuf>,
        failures: Vec<FailedWrite>,
    },
}

/// A file that could not be written.
#[derive(Debug)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub error: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerateResult::Written(paths) => {
                out.preformatted(&format!("$ kiln generate {}", self.input));
                out.newline();
                out.section("The following files have been generated");
                for path in paths {
                    out.list_item(&path.display().to_string());
                }
            }
            GenerateResult::Existing(paths) => {
                let listing: Vec<String> = paths
                    .iter()
                    .map(|path| format!("  - {}", path.display()))
                    .collect();
                out.error(&format!(
                    "generating code would overwrite the following files:\n{}",
                    listing.join("\n")
                ));
            }
            GenerateResult::Failed { written, failures } => {
                for failure in failures {
                    out.error(&format!(
                        "failed to write {}: {}",
                        failure.path.display(),
                        failure.error
                    ));
                }
                for path in written {
                    out.warning(&format!("left in place: {}", path.display()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            input: "my-button".to_string(),
            result: GenerateResult::Written(vec![
                PathBuf::from("src/components/my-button/my-button.tsx"),
                PathBuf::from("src/components/my-button/my-button.css"),
            ]),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "$ kiln generate my-button",
                "",
                "The following files have been generated:",
                "  - src/components/my-button/my-button.tsx",
                "  - src/components/my-button/my-button.css",
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_render_existing_lists_every_file() {
        let report = GenerateReport {
            input: "my-button".to_string(),
            result: GenerateResult::Existing(vec![
                PathBuf::from("src/components/my-button/my-button.tsx"),
                PathBuf::from("src/components/my-button/my-button.css"),
            ]),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert!(!report.is_success());
        assert!(out.stdout.is_empty());
        assert_eq!(
            out.stderr,
            vec![
                "error: generating code would overwrite the following files:\n  \
                 - src/components/my-button/my-button.tsx\n  \
                 - src/components/my-button/my-button.css"
            ]
        );
    }

    #[test]
    fn test_render_failures() {
        let report = GenerateReport {
            input: "my-button".to_string(),
            result: GenerateResult::Failed {
                written: vec![PathBuf::from("a.tsx")],
                failures: vec![FailedWrite {
                    path: PathBuf::from("a.css"),
                    error: "permission denied".to_string(),
                }],
            },
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.stderr,
            vec![
                "error: failed to write a.css: permission denied",
                "warning: left in place: a.tsx",
            ]
        );
    }
}
