//! End-to-end test generator.

use std::path::{Path, PathBuf};

use kiln_core::{FileRules, GeneratedFile, TESTING_PACKAGE};

use super::file_path;
use crate::Extension;

/// The `test/<tag>.e2e.ts` browser test.
pub struct E2eTest {
    tag: String,
}

impl E2eTest {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl GeneratedFile for E2eTest {
    fn path(&self, base: &Path) -> PathBuf {
        file_path(base, &self.tag, Extension::E2eTs)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let tag = &self.tag;

        format!(
            r#"import {{ newE2EPage }} from '{TESTING_PACKAGE}';

describe('{tag}', () => {{
  it('renders', async () => {{
    const page = await newE2EPage();
    await page.setContent('<{tag}></{tag}>');

    const element = await page.find('{tag}');
    expect(element).toHaveClass('hydrated');
  }});
}});
"#
        )
    }
}
