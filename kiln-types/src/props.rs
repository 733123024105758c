use kiln_ir::{ComponentMeta, Property};

use crate::{TypeImportRegistry, TypeInfo, get_text_docs, rename_identifier, update_type_identifier_names};

/// Type records for a component's properties, followed by its virtual
/// properties.
pub fn generate_prop_types(cmp: &ComponentMeta, registry: &TypeImportRegistry) -> Vec<TypeInfo> {
    let props = cmp.properties.iter().map(|prop| TypeInfo {
        name: prop.name.clone(),
        ty: prop_type(prop, cmp, registry),
        optional: prop.optional,
        required: prop.required,
        internal: prop.internal,
        jsdoc: get_text_docs(prop.docs.as_ref()),
    });

    let virtual_props = cmp.virtual_properties.iter().map(|prop| TypeInfo {
        name: prop.name.clone(),
        ty: prop.ty.clone(),
        optional: true,
        required: false,
        internal: false,
        jsdoc: prop.docs.clone(),
    });

    props.chain(virtual_props).collect()
}

fn prop_type(prop: &Property, cmp: &ComponentMeta, registry: &TypeImportRegistry) -> String {
    update_type_identifier_names(
        &prop.complex_type.references,
        &cmp.source_file_path,
        registry,
        &prop.complex_type.original,
        rename_identifier,
    )
}
