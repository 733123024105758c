//! Rewriting type text with collision-free identifier names.

use std::path::Path;

use indexmap::IndexSet;
use kiln_ir::TypeReferences;

use crate::{TypeAlias, TypeImportRegistry, resolve_reference_file};

/// Apply every alias recorded for the files `references` point at.
///
/// Each declaring file is visited once, even when several identifiers come
/// from it. Files missing from the registry are skipped.
pub fn update_type_identifier_names<F>(
    references: &TypeReferences,
    source_file: &Path,
    registry: &TypeImportRegistry,
    initial_type: &str,
    rename: F,
) -> String
where
    F: Fn(&str, &TypeAlias) -> String,
{
    let files: IndexSet<_> = references
        .values()
        .filter_map(|reference| resolve_reference_file(reference, source_file))
        .collect();

    let mut the_type = initial_type.to_string();
    for file in &files {
        let Some(aliases) = registry.aliases(file) else {
            continue;
        };
        for alias in aliases {
            the_type = rename(&the_type, alias);
        }
    }
    the_type
}

/// Whole-identifier rename, used for property and event types.
pub fn rename_identifier(current: &str, alias: &TypeAlias) -> String {
    if alias.local_name == current && !alias.import_name.is_empty() {
        alias.import_name.clone()
    } else {
        current.to_string()
    }
}

/// Replace every occurrence of the local name, used for method signatures.
///
/// Signatures are free text, so this also rewrites identifiers that merely
/// contain the local name.
pub fn rename_occurrences(current: &str, alias: &TypeAlias) -> String {
    if alias.local_name.is_empty() || alias.local_name == alias.import_name {
        return current.to_string();
    }
    current.replace(&alias.local_name, &alias.import_name)
}
