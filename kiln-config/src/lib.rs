//! Project configuration for kiln.
//!
//! Parses `kiln.toml`, the file that marks a project root, and validates
//! user-supplied custom element tag names. Errors are `miette` diagnostics
//! so the CLI can point at the offending line.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod tag;

pub use config::{CONFIG_FILENAME, KilnToml, ProjectConfig, ProjectSection};
pub use error::{Error, Result};
pub use tag::{validate_component_tag, validate_tag};
