//! Projection of an interface back to a minimal DTDL fragment.
//!
//! Display/debug helper, not canonical serialization: only the first
//! `extends` entry is projected, so the projection is not round-trip
//! complete for interfaces with multiple parents.

use serde::{Deserialize, Serialize};

use super::entity::InterfaceInfo;

/// Prefix of the versioned DTDL context IRI.
pub const DTDL_CONTEXT_PREFIX: &str = "dtmi:dtdl:context;";

/// Minimal DTDL rendering of an interface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceFragment {
    /// DTMI of the interface.
    #[serde(rename = "@id")]
    pub id: String,

    /// Entity kind literal (`Interface`).
    #[serde(rename = "@type")]
    pub entity_type: String,

    /// Versioned DTDL context, e.g. `["dtmi:dtdl:context;3"]`.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// First parent only; omitted when the interface extends nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<ExtendsFragment>,
}

/// The `extends` clause of an [`InterfaceFragment`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendsFragment {
    /// DTMI of the parent interface.
    #[serde(rename = "@id")]
    pub id: String,

    /// Entity kind literal of the parent.
    #[serde(rename = "@type")]
    pub entity_type: String,
}

/// Project an interface to its minimal DTDL fragment.
pub fn serialise_interface(interface: &InterfaceInfo) -> InterfaceFragment {
    InterfaceFragment {
        id: interface.id.clone(),
        entity_type: interface.entity_kind.clone(),
        context: vec![format!(
            "{DTDL_CONTEXT_PREFIX}{}",
            interface.language_major_version
        )],
        extends: interface.extends.first().map(|parent| ExtendsFragment {
            id: parent.clone(),
            entity_type: interface.entity_kind.clone(),
        }),
    }
}
