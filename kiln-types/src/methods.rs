use kiln_ir::{ComponentMeta, Method};

use crate::{TypeImportRegistry, TypeInfo, get_text_docs, rename_occurrences, update_type_identifier_names};

/// Type records for a component's public methods.
///
/// Methods are never optional or required at this layer.
pub fn generate_method_types(cmp: &ComponentMeta, registry: &TypeImportRegistry) -> Vec<TypeInfo> {
    cmp.methods
        .iter()
        .map(|method| TypeInfo {
            name: method.name.clone(),
            ty: method_type(method, cmp, registry),
            optional: false,
            required: false,
            internal: method.internal,
            jsdoc: get_text_docs(method.docs.as_ref()),
        })
        .collect()
}

fn method_type(method: &Method, cmp: &ComponentMeta, registry: &TypeImportRegistry) -> String {
    update_type_identifier_names(
        &method.complex_type.references,
        &cmp.source_file_path,
        registry,
        &method.complex_type.signature,
        rename_occurrences,
    )
}
