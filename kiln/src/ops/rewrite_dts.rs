//! Rewrite operation - make emitted declaration files self-contained.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use kiln_core::{File, write_all};
use kiln_types::{copy_core_dts, update_core_types_imports};

use crate::reports::{FailedWrite, RewriteDtsReport};

/// Options for the rewrite operation.
pub struct RewriteOptions<'a> {
    /// Directory the declarations are emitted to.
    pub types_dir: &'a Path,
    /// Declaration files to rewrite in place.
    pub files: &'a [PathBuf],
    /// Core typings to copy into the types directory.
    pub core_dts: Option<&'a Path>,
}

/// Execute the rewrite operation.
///
/// Every file is attempted; read and write failures are collected in the
/// report instead of stopping the batch.
pub fn rewrite_dts(opts: RewriteOptions) -> Result<RewriteDtsReport> {
    let mut failures = Vec::new();
    let mut pending = Vec::new();
    let mut unchanged = 0;

    for path in opts.files {
        match read_and_rewrite(opts.types_dir, path) {
            Ok(Some(file)) => pending.push(file),
            Ok(None) => unchanged += 1,
            Err(err) => failures.push(FailedWrite {
                path: path.clone(),
                error: format!("{err:#}"),
            }),
        }
    }

    let mut rewritten = Vec::new();
    for outcome in write_all(&pending) {
        match outcome.result {
            Ok(_) => rewritten.push(outcome.path),
            Err(err) => failures.push(FailedWrite {
                path: outcome.path,
                error: format!("{err:#}"),
            }),
        }
    }

    let mut core_dts = None;
    if let Some(src) = opts.core_dts {
        for outcome in copy_core_dts(src, &[opts.types_dir.to_path_buf()])? {
            match outcome.result {
                Ok(_) => core_dts = Some(outcome.path),
                Err(err) => failures.push(FailedWrite {
                    path: outcome.path,
                    error: format!("{err:#}"),
                }),
            }
        }
    }

    Ok(RewriteDtsReport {
        rewritten,
        unchanged,
        core_dts,
        failures,
    })
}

/// The rewritten file, or `None` when nothing in it changes.
fn read_and_rewrite(types_dir: &Path, path: &Path) -> Result<Option<File>> {
    let path = std::path::absolute(path)
        .wrap_err_with(|| format!("Failed to resolve {}", path.display()))?;
    let content = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let updated = update_core_types_imports(types_dir, &path, &content);
    if updated == content {
        return Ok(None);
    }

    Ok(Some(File::new(path, updated)))
}
