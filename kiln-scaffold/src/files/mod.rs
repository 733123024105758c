//! Boilerplate file generators.

mod component_tsx;
mod e2e_test;
mod style_css;

use std::path::{Path, PathBuf};

pub use component_tsx::ComponentTsx;
pub use e2e_test::E2eTest;
use kiln_core::GeneratedFile;
pub use spec_test::SpecTest;
pub use style_css::StyleCss;

use crate::Extension;

/// Directory holding generated test files, relative to the component.
pub const TEST_DIR: &str = "test";

/// Get the generator for one kind of boilerplate.
pub fn generator(
    tag: &str,
    extension: Extension,
    with_css: bool,
) -> Box<dyn GeneratedFile + Send + Sync> {
    match extension {
        Extension::Tsx => Box::new(ComponentTsx::new(tag, with_css)),
        Extension::Css => Box::new(StyleCss::new(tag)),
        Extension::SpecTsx => Box::new(SpecTest::new(tag)),
        Extension::E2eTs => Box::new(E2eTest::new(tag)),
    }
}

/// Render the boilerplate for one kind of file.
///
/// The output depends only on the tag, the kind and whether a stylesheet
/// is generated alongside.
pub fn boilerplate(tag: &str, extension: Extension, with_css: bool) -> String {
    generator(tag, extension, with_css).render()
}

/// Path of a generated file inside the component directory.
fn file_path(base: &Path, tag: &str, extension: Extension) -> PathBuf {
    let file_name = format!("{}.{}", tag, extension.as_str());
    if extension.is_test() {
        base.join(TEST_DIR).join(file_name)
    } else {
        base.join(file_name)
    }
}
