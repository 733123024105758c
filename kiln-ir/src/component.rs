//! Per-component metadata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ComplexType, Docs, MethodComplexType};

/// Metadata for one component, as extracted by the compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Custom element tag, e.g. `my-button`.
    pub tag_name: String,
    /// Absolute path of the component's source file.
    pub source_file_path: PathBuf,
    /// Members decorated with `@Prop()`.
    pub properties: Vec<Property>,
    /// Synthetic properties with no backing declaration.
    pub virtual_properties: Vec<VirtualProperty>,
    /// Members decorated with `@Event()`.
    pub events: Vec<Event>,
    /// Members decorated with `@Method()`.
    pub methods: Vec<Method>,
}

impl ComponentMeta {
    pub fn new(tag_name: impl Into<String>, source_file_path: impl Into<PathBuf>) -> Self {
        Self {
            tag_name: tag_name.into(),
            source_file_path: source_file_path.into(),
            ..Self::default()
        }
    }
}

/// A public property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub complex_type: ComplexType,
    pub docs: Option<Docs>,
    pub internal: bool,
    pub optional: bool,
    pub required: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, complex_type: ComplexType) -> Self {
        Self {
            name: name.into(),
            complex_type,
            ..Self::default()
        }
    }
}

/// A property that exists only in the emitted typings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub docs: String,
}

/// A custom event emitted by the component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    /// Event name as dispatched, e.g. `myEvent`.
    pub name: String,
    /// Name of the class member holding the emitter.
    pub method: String,
    pub bubbles: bool,
    pub cancelable: bool,
    pub composed: bool,
    pub internal: bool,
    /// Payload type of the `CustomEvent`.
    pub complex_type: ComplexType,
    pub docs: Option<Docs>,
}

impl Event {
    pub fn new(name: impl Into<String>, complex_type: ComplexType) -> Self {
        let name = name.into();
        Self {
            method: name.clone(),
            name,
            bubbles: true,
            cancelable: true,
            composed: true,
            complex_type,
            ..Self::default()
        }
    }
}

/// A public async method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub internal: bool,
    pub complex_type: MethodComplexType,
    pub docs: Option<Docs>,
}

impl Method {
    pub fn new(name: impl Into<String>, complex_type: MethodComplexType) -> Self {
        Self {
            name: name.into(),
            complex_type,
            ..Self::default()
        }
    }
}
