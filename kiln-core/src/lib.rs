//! Core utilities and types for the kiln toolchain.
//!
//! This crate provides file writing, naming helpers and lexical path
//! handling shared by the scaffolder and the type synthesizer.

mod file;
mod paths;
mod utils;

/// Module specifier of the framework's public API.
pub const FRAMEWORK_PACKAGE: &str = "@kiln/core";

/// Module specifier of the framework's testing helpers.
pub const TESTING_PACKAGE: &str = "@kiln/core/testing";

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteOutcome, WriteResult, write_all};
// Path helpers
pub use paths::{clean_path, normalize_path, relative_path, resolve_path};
// String utilities
pub use utils::{create_js_var_name, to_dash_case, to_pascal_case, to_title_case};
