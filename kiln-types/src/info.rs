//! Type records handed to the declaration emitter.

use kiln_ir::ComponentMeta;
use serde::Serialize;

use crate::{
    TypeCounts, TypeImportRegistry, generate_event_types, generate_method_types,
    generate_prop_types, update_reference_type_imports,
};

/// One member of a component's public TypeScript surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub optional: bool,
    pub required: bool,
    pub internal: bool,
    pub jsdoc: String,
}

/// All type records for a single component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypes {
    pub tag_name: String,
    pub properties: Vec<TypeInfo>,
    pub events: Vec<TypeInfo>,
    pub methods: Vec<TypeInfo>,
}

/// Result of synthesizing types for a whole project.
#[derive(Debug, Clone, Serialize)]
pub struct TypeSynthesis {
    pub components: Vec<ComponentTypes>,
    pub imports: TypeImportRegistry,
}

/// Type records for one component against an already populated registry.
pub fn generate_component_types(
    cmp: &ComponentMeta,
    registry: &TypeImportRegistry,
) -> ComponentTypes {
    ComponentTypes {
        tag_name: cmp.tag_name.clone(),
        properties: generate_prop_types(cmp, registry),
        events: generate_event_types(cmp, registry),
        methods: generate_method_types(cmp, registry),
    }
}

/// Register and render every component in order with one shared registry.
///
/// Earlier components win: their identifiers keep their names and later
/// collisions are suffixed.
pub fn synthesize(components: &[ComponentMeta]) -> TypeSynthesis {
    let mut registry = TypeImportRegistry::new();
    let mut counts = TypeCounts::new();

    let components = components
        .iter()
        .map(|cmp| {
            update_reference_type_imports(&mut registry, &mut counts, cmp);
            generate_component_types(cmp, &registry)
        })
        .collect();

    TypeSynthesis {
        components,
        imports: registry,
    }
}
