use kiln_core::to_title_case;
use kiln_ir::{ComponentMeta, Event};

use crate::{TypeImportRegistry, TypeInfo, get_text_docs, rename_identifier, update_type_identifier_names};

/// Type records for a component's events, exposed as `on<Event>` handlers.
pub fn generate_event_types(cmp: &ComponentMeta, registry: &TypeImportRegistry) -> Vec<TypeInfo> {
    cmp.events
        .iter()
        .map(|event| TypeInfo {
            name: format!("on{}", to_title_case(&event.name)),
            ty: event_type(event, cmp, registry),
            optional: false,
            required: false,
            internal: event.internal,
            jsdoc: get_text_docs(event.docs.as_ref()),
        })
        .collect()
}

fn event_type(event: &Event, cmp: &ComponentMeta, registry: &TypeImportRegistry) -> String {
    if event.complex_type.original.is_empty() {
        return "CustomEvent".to_string();
    }

    let payload = update_type_identifier_names(
        &event.complex_type.references,
        &cmp.source_file_path,
        registry,
        &event.complex_type.original,
        rename_identifier,
    );
    format!("(event: CustomEvent<{payload}>) => void")
}
