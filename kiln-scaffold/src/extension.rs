//! Kinds of files the scaffolder can generate.

use std::{fmt, str::FromStr};

/// A generatable file kind, named by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Component source
    Tsx,
    /// Stylesheet
    Css,
    /// Unit test
    SpecTsx,
    /// End-to-end test
    E2eTs,
}

impl Extension {
    /// Kinds the user may opt into; the component source is always generated.
    pub const OPTIONAL: [Extension; 3] = [Extension::Css, Extension::SpecTsx, Extension::E2eTs];

    /// Returns the extension without a leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Tsx => "tsx",
            Extension::Css => "css",
            Extension::SpecTsx => "spec.tsx",
            Extension::E2eTs => "e2e.ts",
        }
    }

    /// Label shown in the interactive file picker.
    pub fn title(&self) -> &'static str {
        match self {
            Extension::Tsx => "Component (.tsx)",
            Extension::Css => "Stylesheet (.css)",
            Extension::SpecTsx => "Spec Test (.spec.tsx)",
            Extension::E2eTs => "E2E Test (.e2e.ts)",
        }
    }

    /// Test files live in a `test/` subdirectory.
    pub fn is_test(&self) -> bool {
        matches!(self, Extension::SpecTsx | Extension::E2eTs)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Extension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "tsx" => Ok(Extension::Tsx),
            "css" => Ok(Extension::Css),
            "spec.tsx" | "spec" => Ok(Extension::SpecTsx),
            "e2e.ts" | "e2e" => Ok(Extension::E2eTs),
            _ => Err(format!(
                "unknown file kind '{}', expected 'css', 'spec.tsx' or 'e2e.ts'",
                s
            )),
        }
    }
}
