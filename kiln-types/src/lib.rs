//! TypeScript declaration synthesis for kiln components.
//!
//! Turns component metadata into the records a declaration emitter needs:
//! one [`TypeInfo`] per public property, event and method. Type identifiers
//! that collide across source files are renamed so that a single bundled
//! declaration file can re-export all of them.
//!
//! # Usage
//!
//! ```ignore
//! use kiln_types::synthesize;
//!
//! let components: Vec<kiln_ir::ComponentMeta> = serde_json::from_str(&json)?;
//! let output = synthesize(&components);
//!
//! for cmp in &output.components {
//!     println!("{}: {} props", cmp.tag_name, cmp.properties.len());
//! }
//! ```
//!
//! The registry and count table are explicit values: build one pair per
//! compilation run and thread it through every component.

mod core_dts;
mod docs;
mod events;
mod identifiers;
mod info;
mod methods;
mod props;
mod registry;

pub use core_dts::{CORE_FILENAME, copy_core_dts, core_dts_path, update_core_types_imports};
pub use docs::get_text_docs;
pub use events::generate_event_types;
pub use identifiers::{rename_identifier, rename_occurrences, update_type_identifier_names};
pub use info::{ComponentTypes, TypeInfo, TypeSynthesis, generate_component_types, synthesize};
pub use methods::generate_method_types;
pub use props::generate_prop_types;
pub use registry::{
    TypeAlias, TypeCounts, TypeImportRegistry, resolve_reference_file,
    update_reference_type_imports,
};
