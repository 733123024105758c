use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kiln-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no kiln.toml found at '{path}'")]
    #[diagnostic(
        code(kiln::not_project_root),
        help("run this command in your project's root directory (the one containing kiln.toml)")
    )]
    NotProjectRoot { path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse kiln.toml")]
    #[diagnostic(code(kiln::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("the project's source directory was not specified")]
    #[diagnostic(
        code(kiln::missing_src_dir),
        help("add `src_dir = \"src\"` to the [project] table of {}", path.display())
    )]
    MissingSrcDir { path: PathBuf },

    #[error("the project's types directory was not specified")]
    #[diagnostic(
        code(kiln::missing_types_dir),
        help("add `types_dir = \"dist/types\"` to the [project] table of {}", path.display())
    )]
    MissingTypesDir { path: PathBuf },

    #[error("{message}")]
    #[diagnostic(
        code(kiln::invalid_tag),
        help("component tags are dash-case, e.g. 'my-button'")
    )]
    InvalidTag { tag: String, message: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid tag error
    pub fn invalid_tag(tag: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTag {
            tag: tag.into(),
            message: message.into(),
        })
    }
}
