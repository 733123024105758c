use std::path::{Path, PathBuf};

use kiln_core::resolve_path;
use serde::Deserialize;

use crate::{Error, Result};

/// Name of the file that marks a project root.
pub const CONFIG_FILENAME: &str = "kiln.toml";

/// Raw contents of kiln.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata and layout
    #[serde(default)]
    pub project: ProjectSection,
}

/// The `[project]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    /// Project name, for display only
    pub name: Option<String>,

    /// Directory holding component sources, relative to the root
    pub src_dir: Option<String>,

    /// Directory where type declarations are emitted
    pub types_dir: Option<String>,
}

impl ProjectConfig {
    /// Parse a kiln.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

/// Represents a kiln.toml file with both its location and parsed config.
#[derive(Debug)]
pub struct KilnToml {
    path: PathBuf,
    root_dir: PathBuf,
    config: ProjectConfig,
}

impl KilnToml {
    /// Open and parse a kiln.toml file.
    ///
    /// A missing file means the command was run outside a project.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Box::new(Error::NotProjectRoot { path: path.clone() })
            } else {
                Box::new(Error::Io {
                    path: path.clone(),
                    source: e,
                })
            }
        })?;

        let filename = path.display().to_string();
        let config = ProjectConfig::from_str_with_filename(&content, &filename)?;
        let root_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        Ok(Self {
            path,
            root_dir,
            config,
        })
    }

    /// Directory containing kiln.toml.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Absolute source directory.
    pub fn src_dir(&self) -> Result<PathBuf> {
        match self.config.project.src_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => Ok(resolve_path(&self.root_dir, dir)),
            _ => Err(Box::new(Error::MissingSrcDir {
                path: self.path.clone(),
            })),
        }
    }

    /// Absolute types directory.
    pub fn types_dir(&self) -> Result<PathBuf> {
        match self.config.project.types_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => Ok(resolve_path(&self.root_dir, dir)),
            _ => Err(Box::new(Error::MissingTypesDir {
                path: self.path.clone(),
            })),
        }
    }
}
