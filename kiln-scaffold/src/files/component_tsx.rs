//! Component source generator.

use std::path::{Path, PathBuf};

use kiln_core::{FRAMEWORK_PACKAGE, FileRules, GeneratedFile, to_pascal_case};

use super::file_path;
use crate::Extension;

/// The `<tag>.tsx` component class.
pub struct ComponentTsx {
    tag: String,
    with_style: bool,
}

impl ComponentTsx {
    pub fn new(tag: impl Into<String>, with_style: bool) -> Self {
        Self {
            tag: tag.into(),
            with_style,
        }
    }
}

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        file_path(base, &self.tag, Extension::Tsx)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let tag = &self.tag;
        let style_url = if self.with_style {
            format!("  styleUrl: '{tag}.css',\n")
        } else {
            String::new()
        };

        format!(
            r#"import {{ Component, Host, h }} from '{FRAMEWORK_PACKAGE}';

@Component({{
  tag: '{tag}',
{style_url}  shadow: true,
}})
export class {class} {{

  render() {{
    return (
      <Host>
        <slot></slot>
      </Host>
    );
  }}

}}
"#,
            class = to_pascal_case(tag),
        )
    }
}
