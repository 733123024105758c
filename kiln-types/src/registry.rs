//! Type import bookkeeping.
//!
//! Every non-global type identifier a component references is recorded
//! against the file that declares it. When two different files declare the
//! same identifier, the later one is given a numeric suffix so both can be
//! re-exported side by side.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use kiln_core::resolve_path;
use kiln_ir::{ComponentMeta, TypeReference, TypeReferences};
use serde::Serialize;

/// Number of distinct files that introduced each identifier name.
#[derive(Debug, Clone, Default)]
pub struct TypeCounts {
    counts: HashMap<String, usize>,
}

impl TypeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a collision-free name for `name`.
    ///
    /// The first request keeps the name unchanged; the n-th later request
    /// gets suffix `n` (`Name`, `Name1`, `Name2`, ...).
    pub fn next_name(&mut self, name: &str) -> String {
        match self.counts.get_mut(name) {
            None => {
                self.counts.insert(name.to_string(), 1);
                name.to_string()
            }
            Some(count) => {
                let suffix = *count;
                *count += 1;
                format!("{name}{suffix}")
            }
        }
    }

    /// How many times `name` has been handed out.
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

/// A referenced identifier and the name it is re-exported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAlias {
    pub local_name: String,
    pub import_name: String,
}

/// Declaring file -> identifiers referenced from it, in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TypeImportRegistry {
    files: IndexMap<PathBuf, Vec<TypeAlias>>,
}

impl TypeImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `local_name` from `file` is referenced.
    ///
    /// Registering the same pair twice is a no-op. Returns the name the
    /// identifier is exported under.
    pub fn register(&mut self, counts: &mut TypeCounts, file: &Path, local_name: &str) -> &str {
        let aliases = self.files.entry(file.to_path_buf()).or_default();

        let index = match aliases.iter().position(|a| a.local_name == local_name) {
            Some(index) => index,
            None => {
                aliases.push(TypeAlias {
                    local_name: local_name.to_string(),
                    import_name: counts.next_name(local_name),
                });
                aliases.len() - 1
            }
        };
        &aliases[index].import_name
    }

    /// Register every non-global reference in `references`.
    pub fn register_references(
        &mut self,
        counts: &mut TypeCounts,
        references: &TypeReferences,
        source_file: &Path,
    ) {
        for (type_name, reference) in references {
            if let Some(file) = resolve_reference_file(reference, source_file) {
                self.register(counts, &file, type_name);
            }
        }
    }

    /// Aliases recorded for `file`.
    pub fn aliases(&self, file: &Path) -> Option<&[TypeAlias]> {
        self.files.get(file).map(Vec::as_slice)
    }

    /// The exported name of `local_name` from `file`, if registered.
    pub fn import_name(&self, file: &Path, local_name: &str) -> Option<&str> {
        self.aliases(file)?
            .iter()
            .find(|a| a.local_name == local_name)
            .map(|a| a.import_name.as_str())
    }

    /// Iterate over files in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[TypeAlias])> {
        self.files
            .iter()
            .map(|(path, aliases)| (path.as_path(), aliases.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with recorded references.
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Find the file that declares a referenced identifier.
///
/// Global references need no import and yield `None`. Relative import paths
/// are resolved against the component's directory; bare module specifiers
/// are kept as written.
pub fn resolve_reference_file(reference: &TypeReference, source_file: &Path) -> Option<PathBuf> {
    match reference {
        TypeReference::Global => None,
        TypeReference::Local => Some(source_file.to_path_buf()),
        TypeReference::Import { path } if path.starts_with('.') => {
            let dir = source_file.parent().unwrap_or(Path::new(""));
            Some(resolve_path(dir, path))
        }
        TypeReference::Import { path } => Some(PathBuf::from(path)),
    }
}

/// Record every type referenced by a component's properties, events and
/// methods, in that order.
pub fn update_reference_type_imports(
    registry: &mut TypeImportRegistry,
    counts: &mut TypeCounts,
    cmp: &ComponentMeta,
) {
    let source_file = cmp.source_file_path.as_path();

    let references = cmp
        .properties
        .iter()
        .map(|p| &p.complex_type.references)
        .chain(cmp.events.iter().map(|e| &e.complex_type.references))
        .chain(cmp.methods.iter().map(|m| &m.complex_type.references));

    for refs in references {
        registry.register_references(counts, refs, source_file);
    }
}

#[cfg(test)]
mod tests {
    use kiln_ir::{ComplexType, Event, Method, MethodComplexType, Property};

    use super::*;

    #[test]
    fn test_type_counts_suffixes() {
        let mut counts = TypeCounts::new();

        assert_eq!(counts.next_name("Options"), "Options");
        assert_eq!(counts.next_name("Options"), "Options1");
        assert_eq!(counts.next_name("Size"), "Size");
        assert_eq!(counts.next_name("Options"), "Options2");
        assert_eq!(counts.next_name("Size"), "Size1");
        assert_eq!(counts.get("Options"), 3);
        assert_eq!(counts.get("Missing"), 0);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TypeImportRegistry::new();
        let mut counts = TypeCounts::new();
        let file = Path::new("/src/types.ts");

        assert_eq!(registry.register(&mut counts, file, "Options"), "Options");
        assert_eq!(registry.register(&mut counts, file, "Options"), "Options");

        assert_eq!(registry.aliases(file).unwrap().len(), 1);
        assert_eq!(counts.get("Options"), 1);
    }

    #[test]
    fn test_same_name_from_different_files() {
        let mut registry = TypeImportRegistry::new();
        let mut counts = TypeCounts::new();
        let a = Path::new("/src/a.ts");
        let b = Path::new("/src/b.ts");
        let c = Path::new("/src/c.ts");

        registry.register(&mut counts, a, "Options");
        registry.register(&mut counts, b, "Options");
        registry.register(&mut counts, c, "Color");
        registry.register(&mut counts, c, "Options");
        registry.register(&mut counts, a, "Color");

        assert_eq!(registry.import_name(a, "Options"), Some("Options"));
        assert_eq!(registry.import_name(b, "Options"), Some("Options1"));
        assert_eq!(registry.import_name(c, "Options"), Some("Options2"));
        assert_eq!(registry.import_name(c, "Color"), Some("Color"));
        assert_eq!(registry.import_name(a, "Color"), Some("Color1"));
        assert_eq!(registry.import_name(b, "Color"), None);
    }

    #[test]
    fn test_resolve_reference_file() {
        let source = Path::new("/some/stubbed/path/my-component.tsx");

        assert_eq!(resolve_reference_file(&TypeReference::Global, source), None);
        assert_eq!(
            resolve_reference_file(&TypeReference::Local, source),
            Some(PathBuf::from("/some/stubbed/path/my-component.tsx"))
        );
        assert_eq!(
            resolve_reference_file(&TypeReference::import("./resources"), source),
            Some(PathBuf::from("/some/stubbed/path/resources"))
        );
        assert_eq!(
            resolve_reference_file(&TypeReference::import("../shared/types"), source),
            Some(PathBuf::from("/some/stubbed/shared/types"))
        );
        assert_eq!(
            resolve_reference_file(&TypeReference::import("@ui/tokens"), source),
            Some(PathBuf::from("@ui/tokens"))
        );
    }

    #[test]
    fn test_update_reference_type_imports_walks_all_members() {
        let mut cmp = ComponentMeta::new("my-cmp", "/src/my-cmp/my-cmp.tsx");
        cmp.properties.push(Property::new(
            "size",
            ComplexType::new("Size").with_reference("Size", TypeReference::import("./types")),
        ));
        cmp.events.push(Event::new(
            "change",
            ComplexType::new("ChangeDetail").with_reference("ChangeDetail", TypeReference::Local),
        ));
        cmp.methods.push(Method::new(
            "open",
            MethodComplexType::new("(opts: Options) => Promise<void>", "Promise<void>")
                .with_reference("Options", TypeReference::import("./types"))
                .with_reference("Promise", TypeReference::Global),
        ));

        let mut registry = TypeImportRegistry::new();
        let mut counts = TypeCounts::new();
        update_reference_type_imports(&mut registry, &mut counts, &cmp);

        let files: Vec<&Path> = registry.iter().map(|(path, _)| path).collect();
        assert_eq!(
            files,
            [
                Path::new("/src/my-cmp/types"),
                Path::new("/src/my-cmp/my-cmp.tsx")
            ]
        );
        let names: Vec<&str> = registry
            .aliases(Path::new("/src/my-cmp/types"))
            .unwrap()
            .iter()
            .map(|a| a.local_name.as_str())
            .collect();
        assert_eq!(names, ["Size", "Options"]);
        assert_eq!(counts.get("Promise"), 0);
    }

    #[test]
    fn test_registry_serializes_as_map() {
        let mut registry = TypeImportRegistry::new();
        let mut counts = TypeCounts::new();
        registry.register(&mut counts, Path::new("/src/a.ts"), "Options");

        let json = serde_json::to_value(&registry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "/src/a.ts": [{ "localName": "Options", "importName": "Options" }]
            })
        );
    }
}
