//! Stylesheet generator.

use std::path::{Path, PathBuf};

use kiln_core::{FileRules, GeneratedFile};

use super::file_path;
use crate::Extension;

/// The `<tag>.css` host stylesheet.
pub struct StyleCss {
    tag: String,
}

impl StyleCss {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl GeneratedFile for StyleCss {
    fn path(&self, base: &Path) -> PathBuf {
        file_path(base, &self.tag, Extension::Css)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#":host {
  display: block;
}
"#
        .to_string()
    }
}
