//! Component boilerplate generation for kiln.
//!
//! Given a tag name such as `my-button`, renders the starter files for a
//! new component and writes them under the project's source directory.
//!
//! # Usage
//!
//! ```ignore
//! use kiln_scaffold::{Extension, ScaffoldPlan};
//!
//! let plan = ScaffoldPlan::new(&src_dir, "forms/my-input", &[Extension::Css]);
//! if !plan.existing_files().is_empty() {
//!     // refuse to overwrite user code
//! }
//! plan.create_dirs()?;
//! for outcome in plan.write() {
//!     println!("{}", outcome.path.display());
//! }
//! ```
//!
//! # Generated Output
//!
//! - `components/<dir>/<tag>/<tag>.tsx` - the component class
//! - `components/<dir>/<tag>/<tag>.css` - host styles
//! - `components/<dir>/<tag>/test/<tag>.spec.tsx` - unit test
//! - `components/<dir>/<tag>/test/<tag>.e2e.ts` - end-to-end test

mod extension;
mod plan;

pub mod files;

pub use extension::Extension;
pub use files::boilerplate;
pub use plan::{BoilerplateFile, COMPONENTS_DIR, ScaffoldPlan, component_tag};
