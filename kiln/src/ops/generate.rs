//! Generate operation - component scaffolding.

use std::path::Path;

use eyre::Result;
use kiln_core::{WriteOutcome, WriteResult, relative_path};
use kiln_scaffold::ScaffoldPlan;

use crate::reports::{FailedWrite, GenerateReport, GenerateResult};

/// Execute the generate operation.
///
/// Creates the component directories, refuses to touch any file that already
/// exists, then writes every boilerplate file. Paths in the report are
/// relative to `root_dir`.
pub fn generate(plan: &ScaffoldPlan, input: &str, root_dir: &Path) -> Result<GenerateReport> {
    plan.create_dirs()?;

    let relative = |path: &Path| relative_path(root_dir, path);

    let existing = plan.existing_files();
    let result = if !existing.is_empty() {
        GenerateResult::Existing(
            existing
                .iter()
                .map(|path| relative_path(root_dir, path))
                .collect(),
        )
    } else {
        write_result(plan.write(), root_dir)
    };

    Ok(GenerateReport {
        input: input.to_string(),
        result,
    })
}

/// Sort write outcomes into written files and failures.
///
/// A skipped file appeared after the overwrite check and counts as a failure.
fn write_result(outcomes: Vec<WriteOutcome>, root_dir: &Path) -> GenerateResult {
    let mut written = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        let path = relative_path(root_dir, &outcome.path);
        match outcome.result {
            Ok(WriteResult::Written) => written.push(path),
            Ok(WriteResult::Skipped) => failures.push(FailedWrite {
                path,
                error: "appeared after the overwrite check; left untouched".to_string(),
            }),
            Err(err) => failures.push(FailedWrite {
                path,
                error: format!("{err:#}"),
            }),
        }
    }

    if failures.is_empty() {
        GenerateResult::Written(written)
    } else {
        GenerateResult::Failed { written, failures }
    }
}
