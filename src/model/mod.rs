//! DTDL object model types.
//!
//! A parse request yields a [`DtdlObjectModel`]: a fresh, caller-owned map
//! from DTMI to entity. Entities are polymorphic over their `EntityKind`;
//! interfaces are modelled fully, every other kind deserializes to a generic
//! record that preserves its fields.

mod entity;
mod serialise;

pub use entity::{DtdlObjectModel, EntityInfo, EntityRecord, InterfaceInfo};
pub use serialise::{DTDL_CONTEXT_PREFIX, ExtendsFragment, InterfaceFragment, serialise_interface};
