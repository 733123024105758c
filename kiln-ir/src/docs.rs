use serde::{Deserialize, Serialize};

/// JSDoc attached to a component member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Docs {
    pub text: String,
    pub tags: Vec<DocTag>,
}

impl Docs {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Add a block tag such as `@deprecated`.
    pub fn with_tag(mut self, name: impl Into<String>, text: Option<&str>) -> Self {
        self.tags.push(DocTag {
            name: name.into(),
            text: text.map(str::to_string),
        });
        self
    }
}

/// A single `@name text` block tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    pub name: String,
    #[serde(default)]
    pub text: Option<String>,
}
