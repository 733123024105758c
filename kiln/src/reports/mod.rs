//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;
mod rewrite_dts;
mod types;

pub use generate::{FailedWrite, GenerateReport, GenerateResult};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
pub use rewrite_dts::RewriteDtsReport;
pub use types::{TypesDestination, TypesReport};
