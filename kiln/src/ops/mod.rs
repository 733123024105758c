//! Core operations.
//!
//! This module contains the business logic for kiln commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod rewrite_dts;
pub mod types;

pub use generate::generate;
pub use rewrite_dts::{RewriteOptions, rewrite_dts};
pub use types::types;
