use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use rayon::prelude::*;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a [`File`] under `base`, carrying this file's rules
    fn to_file(&self, base: &Path) -> File {
        File::new(self.path(base), self.render()).with_rules(self.rules())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Outcome of one file in a batch written by [`write_all`].
#[derive(Debug)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub result: Result<WriteResult>,
}

impl WriteOutcome {
    /// Whether the file ended up on disk with the new content.
    pub fn is_written(&self) -> bool {
        matches!(self.result, Ok(WriteResult::Written))
    }
}

/// Write a batch of files in parallel.
///
/// Every file is attempted; a failure does not stop its siblings and nothing
/// already written is rolled back. Outcomes are returned in input order.
pub fn write_all(files: &[File]) -> Vec<WriteOutcome> {
    files
        .par_iter()
        .map(|file| WriteOutcome {
            path: file.path.clone(),
            result: file.write(),
        })
        .collect()
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files that must never clobber user code.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (boilerplate)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("greeting.txt")
        }

        fn rules(&self) -> FileRules {
            FileRules::create_once()
        }

        fn render(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .with_rules(FileRules::create_once())
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_keeps_its_rules() {
        let temp = TempDir::new().unwrap();

        let file = Greeting.to_file(temp.path());

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("greeting.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_write_all_keeps_input_order() {
        let temp = TempDir::new().unwrap();
        let files: Vec<File> = (0..8)
            .map(|i| File::new(temp.path().join(format!("{i}.txt")), i.to_string()))
            .collect();

        let outcomes = write_all(&files);

        assert_eq!(outcomes.len(), 8);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.path, temp.path().join(format!("{i}.txt")));
            assert!(outcome.is_written());
        }
    }

    #[test]
    fn test_write_all_reports_failures_without_stopping_siblings() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is expected makes the first write fail.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let files = vec![
            File::new(blocker.join("nested.txt"), "nope"),
            File::new(temp.path().join("ok.txt"), "fine"),
        ];

        let outcomes = write_all(&files);

        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].is_written());
        assert_eq!(fs::read_to_string(temp.path().join("ok.txt")).unwrap(), "fine");
    }
}
