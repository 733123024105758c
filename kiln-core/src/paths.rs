//! Lexical path helpers.
//!
//! None of these touch the filesystem; they behave like node's `path`
//! module so that paths recorded in component metadata compare equal no
//! matter how they were spelled.

use std::path::{Component, Path, PathBuf};

/// Render a path with forward slashes.
pub fn normalize_path(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Collapse `.` and `..` segments without resolving symlinks.
///
/// `..` above the root is dropped, `..` at the start of a relative path is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join `path` onto `base` and clean the result.
///
/// An absolute `path` replaces `base` entirely.
pub fn resolve_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    clean_path(&base.join(path))
}

/// Compute the path of `to` relative to the directory `from`.
///
/// Returns an empty path when both point at the same location.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = clean_path(from);
    let to = clean_path(to);
    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from_parts.len() {
        rel.push("..");
    }
    for part in &to_parts[common..] {
        rel.push(part.as_os_str());
    }
    rel
}
