use std::path::{Component, Path, PathBuf};

use eyre::{Context, Result};
use kiln_core::{File, WriteOutcome, write_all};

use crate::{
    Extension,
    files::{self, TEST_DIR},
};

/// Directory under the source root that holds components.
pub const COMPONENTS_DIR: &str = "components";

/// The tag part of a scaffold input: its last path segment.
pub fn component_tag(input: &str) -> String {
    Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// One file a [`ScaffoldPlan`] will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateFile {
    pub extension: Extension,
    pub path: PathBuf,
}

/// Everything needed to scaffold one component.
///
/// The input may carry leading directories (`forms/my-input`); the last
/// segment is the tag and the rest nests the component directory. Root,
/// `.` and `..` segments are dropped.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    tag: String,
    out_dir: PathBuf,
    extensions: Vec<Extension>,
}

impl ScaffoldPlan {
    /// Build a plan for `input` under `src_dir`.
    ///
    /// The component file is always included. Extras keep their given order
    /// and duplicates are dropped.
    pub fn new(src_dir: &Path, input: &str, extras: &[Extension]) -> Self {
        let tag = component_tag(input);

        let mut out_dir = src_dir.join(COMPONENTS_DIR);
        if let Some(parent) = Path::new(input).parent() {
            // Only plain segments, so the result stays under `components/`.
            for component in parent.components() {
                if let Component::Normal(segment) = component {
                    out_dir.push(segment);
                }
            }
        }
        out_dir.push(&tag);

        let mut extensions = vec![Extension::Tsx];
        for ext in extras {
            if !extensions.contains(ext) {
                extensions.push(*ext);
            }
        }

        Self {
            tag,
            out_dir,
            extensions,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn with_css(&self) -> bool {
        self.extensions.contains(&Extension::Css)
    }

    pub fn has_tests(&self) -> bool {
        self.extensions.iter().any(|ext| ext.is_test())
    }

    /// Target paths in extension order.
    pub fn files(&self) -> Vec<BoilerplateFile> {
        self.extensions
            .iter()
            .map(|&extension| BoilerplateFile {
                extension,
                path: files::generator(&self.tag, extension, self.with_css()).path(&self.out_dir),
            })
            .collect()
    }

    /// Target paths that already exist on disk.
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.files()
            .into_iter()
            .map(|file| file.path)
            .filter(|path| path.exists())
            .collect()
    }

    /// Create the component directory, plus `test/` when tests are requested.
    pub fn create_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)
            .wrap_err_with(|| format!("Failed to create directory {}", self.out_dir.display()))?;
        if self.has_tests() {
            let test_dir = self.out_dir.join(TEST_DIR);
            std::fs::create_dir_all(&test_dir)
                .wrap_err_with(|| format!("Failed to create directory {}", test_dir.display()))?;
        }
        Ok(())
    }

    /// Write every file. Files that appeared since planning are skipped.
    pub fn write(&self) -> Vec<WriteOutcome> {
        let with_css = self.with_css();
        let files: Vec<File> = self
            .extensions
            .iter()
            .map(|&ext| files::generator(&self.tag, ext, with_css).to_file(&self.out_dir))
            .collect();

        write_all(&files)
    }
}
