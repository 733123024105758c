//! Type descriptors attached to component members.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Docs;

/// Identifier name -> where it is declared, in source order.
pub type TypeReferences = IndexMap<String, TypeReference>;

/// Where a referenced type identifier is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "location", rename_all = "lowercase")]
pub enum TypeReference {
    /// Ambient type, no import needed (`Array`, `HTMLElement`).
    Global,
    /// Declared in the component's own source file.
    Local,
    /// Imported from another module.
    Import { path: String },
}

impl TypeReference {
    /// Create an import reference.
    pub fn import(path: impl Into<String>) -> Self {
        Self::Import { path: path.into() }
    }
}

/// Type of a property or event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexType {
    /// The type as written in source.
    pub original: String,
    /// The structurally resolved type.
    pub resolved: String,
    /// Identifiers referenced by `original`.
    pub references: TypeReferences,
}

impl ComplexType {
    /// Create a type with the given source text and no references.
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Self::default()
        }
    }

    /// Add a referenced identifier.
    pub fn with_reference(mut self, name: impl Into<String>, reference: TypeReference) -> Self {
        self.references.insert(name.into(), reference);
        self
    }
}

/// Call signature of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodComplexType {
    /// Full signature text, e.g. `(name: Foo) => Promise<void>`.
    pub signature: String,
    /// Parameter docs.
    pub parameters: Vec<Docs>,
    /// Return type text.
    #[serde(rename = "return")]
    pub return_type: String,
    /// Identifiers referenced by `signature`.
    pub references: TypeReferences,
}

impl MethodComplexType {
    pub fn new(signature: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            return_type: return_type.into(),
            ..Self::default()
        }
    }

    /// Add a referenced identifier.
    pub fn with_reference(mut self, name: impl Into<String>, reference: TypeReference) -> Self {
        self.references.insert(name.into(), reference);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_reference_from_json() {
        let global: TypeReference = serde_json::from_str(r#"{"location":"global"}"#).unwrap();
        let local: TypeReference =
            serde_json::from_str(r#"{"location":"local","path":"ignored"}"#).unwrap();
        let import: TypeReference =
            serde_json::from_str(r#"{"location":"import","path":"./resources"}"#).unwrap();

        assert_eq!(global, TypeReference::Global);
        assert_eq!(local, TypeReference::Local);
        assert_eq!(import, TypeReference::import("./resources"));
    }

    #[test]
    fn test_references_keep_source_order() {
        let ty: ComplexType = serde_json::from_str(
            r#"{
                "original": "Zed & Alpha & Mid",
                "references": {
                    "Zed": { "location": "local" },
                    "Alpha": { "location": "import", "path": "./a" },
                    "Mid": { "location": "global" }
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = ty.references.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zed", "Alpha", "Mid"]);
        assert_eq!(ty.resolved, "");
    }

    #[test]
    fn test_method_return_field_name() {
        let ty: MethodComplexType = serde_json::from_str(
            r#"{ "signature": "() => Promise<void>", "return": "Promise<void>" }"#,
        )
        .unwrap();

        assert_eq!(ty.return_type, "Promise<void>");
        assert!(ty.references.is_empty());
    }
}
