//! Component metadata types for kiln.
//!
//! The compiler front end extracts this metadata from component sources and
//! hands it over as JSON. Everything here is read-only input for the type
//! synthesizer.
//!
//! # Architecture
//!
//! ```text
//! component.tsx → compiler (extraction) → kiln-ir (metadata) → kiln-types
//! ```

mod component;
mod docs;
mod types;

pub use component::{ComponentMeta, Event, Method, Property, VirtualProperty};
pub use docs::{DocTag, Docs};
pub use types::{ComplexType, MethodComplexType, TypeReference, TypeReferences};
