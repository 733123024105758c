//! Making emitted declaration files self-contained.
//!
//! Published declarations import from the framework package. Consumers may
//! not have it installed, so those imports are pointed at a copy of the
//! core typings placed next to the declarations.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use eyre::{Context, Result};
use kiln_core::{FRAMEWORK_PACKAGE, File, WriteOutcome, normalize_path, relative_path, write_all};
use regex::{Captures, Regex};

/// Base name of the bundled core typings.
pub const CORE_FILENAME: &str = "kiln-public-runtime";

static FRAMEWORK_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(from\s*['"]){}(?:/internal)?(['"])"#,
        regex::escape(FRAMEWORK_PACKAGE)
    ))
    .expect("framework import pattern is valid")
});

/// Location of the bundled core typings inside `types_dir`.
pub fn core_dts_path(types_dir: &Path) -> PathBuf {
    types_dir.join(format!("{CORE_FILENAME}.d.ts"))
}

/// Rewrite `from '@kiln/core'` and `from '@kiln/core/internal'` in a
/// declaration file to a relative import of the core typings in `types_dir`.
pub fn update_core_types_imports(types_dir: &Path, dts_file_path: &Path, content: &str) -> String {
    if !content.contains(FRAMEWORK_PACKAGE) {
        return content.to_string();
    }

    let dir = dts_file_path.parent().unwrap_or(Path::new(""));
    let mut core_path = normalize_path(relative_path(dir, types_dir).join(CORE_FILENAME));
    if !core_path.starts_with('.') {
        core_path = format!("./{core_path}");
    }

    FRAMEWORK_IMPORT
        .replace_all(content, |caps: &Captures| {
            format!("{}{}{}", &caps[1], core_path, &caps[2])
        })
        .into_owned()
}

/// Copy the core typings into every types directory.
///
/// Fails only if the source cannot be read; per-directory write failures
/// are reported in the outcomes.
pub fn copy_core_dts(core_dts: &Path, types_dirs: &[PathBuf]) -> Result<Vec<WriteOutcome>> {
    let content = std::fs::read_to_string(core_dts)
        .wrap_err_with(|| format!("Failed to read core typings {}", core_dts.display()))?;

    let files: Vec<File> = types_dirs
        .iter()
        .map(|dir| File::new(core_dts_path(dir), content.as_str()))
        .collect();

    Ok(write_all(&files))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_same_directory() {
        let content = "import { EventEmitter } from '@kiln/core';\n";

        let actual = update_core_types_imports(
            Path::new("/dist/types"),
            Path::new("/dist/types/components.d.ts"),
            content,
        );

        assert_eq!(
            actual,
            "import { EventEmitter } from './kiln-public-runtime';\n"
        );
    }

    #[test]
    fn test_nested_declaration_and_internal_import() {
        let content = concat!(
            "import type { JSXBase } from \"@kiln/core/internal\";\n",
            "import { h } from '@kiln/core';\n",
        );

        let actual = update_core_types_imports(
            Path::new("/dist/types"),
            Path::new("/dist/types/components/my-button/my-button.d.ts"),
            content,
        );

        assert_eq!(
            actual,
            concat!(
                "import type { JSXBase } from \"../../kiln-public-runtime\";\n",
                "import { h } from '../../kiln-public-runtime';\n",
            )
        );
    }

    #[test]
    fn test_other_specifiers_untouched() {
        let content = concat!(
            "import { newSpecPage } from '@kiln/core/testing';\n",
            "import { Foo } from './foo';\n",
        );

        let actual = update_core_types_imports(
            Path::new("/dist/types"),
            Path::new("/dist/types/a.d.ts"),
            content,
        );

        assert_eq!(actual, content);
    }

    #[test]
    fn test_core_dts_path() {
        assert_eq!(
            core_dts_path(Path::new("/dist/types")),
            PathBuf::from("/dist/types/kiln-public-runtime.d.ts")
        );
    }

    #[test]
    fn test_copy_core_dts_to_every_dir() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("core.d.ts");
        fs::write(&src, "export declare const h: any;\n").unwrap();
        let dirs = vec![temp.path().join("a"), temp.path().join("b").join("types")];

        let outcomes = copy_core_dts(&src, &dirs).unwrap();

        assert!(outcomes.iter().all(WriteOutcome::is_written));
        for dir in &dirs {
            assert_eq!(
                fs::read_to_string(core_dts_path(dir)).unwrap(),
                "export declare const h: any;\n"
            );
        }
    }

    #[test]
    fn test_copy_core_dts_missing_source() {
        let temp = TempDir::new().unwrap();
        assert!(copy_core_dts(&temp.path().join("missing.d.ts"), &[temp.path().to_path_buf()]).is_err());
    }
}
