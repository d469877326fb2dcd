//! Entity types as emitted by the DTDL engine.

use std::collections::HashMap;

use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;

/// Object model returned by a successful parse: DTMI → entity.
///
/// Keys are unique by construction (a DTMI is globally unique) and the map
/// is never mutated after being returned; every parse request produces a
/// fresh, independently-owned instance.
pub type DtdlObjectModel = HashMap<String, EntityInfo>;

/// One entity in the object model, polymorphic over `EntityKind`.
///
/// Dispatch happens on the wire tag: `"Interface"` deserializes to the fully
/// modelled [`InterfaceInfo`], anything else to an [`EntityRecord`] that
/// keeps the remaining fields intact.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityInfo {
    Interface(InterfaceInfo),
    Other(EntityRecord),
}

impl EntityInfo {
    /// DTMI of this entity.
    pub fn id(&self) -> &str {
        match self {
            Self::Interface(interface) => &interface.id,
            Self::Other(record) => &record.id,
        }
    }

    /// The `EntityKind` literal as it appears on the wire.
    pub fn entity_kind(&self) -> &str {
        match self {
            Self::Interface(interface) => &interface.entity_kind,
            Self::Other(record) => &record.entity_kind,
        }
    }

    /// Narrow to an interface, if this entity is one.
    pub fn as_interface(&self) -> Option<&InterfaceInfo> {
        match self {
            Self::Interface(interface) => Some(interface),
            Self::Other(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for EntityInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value.get("EntityKind").and_then(Value::as_str) {
            Some("Interface") => serde_json::from_value(value)
                .map(Self::Interface)
                .map_err(de::Error::custom),
            _ => serde_json::from_value(value)
                .map(Self::Other)
                .map_err(de::Error::custom),
        }
    }
}

/// An interface entity, including its inheritance edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct InterfaceInfo {
    /// DTMI of this interface.
    #[serde(rename = "Id")]
    pub id: String,

    /// Always the literal `Interface`.
    #[serde(rename = "EntityKind")]
    pub entity_kind: String,

    /// Metamodel class id (e.g. `dtmi:dtdl:class:Interface;3`).
    #[serde(rename = "ClassId", default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,

    /// DTMI of the entity this one is lexically nested under, if any.
    #[serde(rename = "ChildOf", default, skip_serializing_if = "Option::is_none")]
    pub child_of: Option<String>,

    /// DTMI of the entity whose document defines this one, if any.
    #[serde(rename = "DefinedIn", default, skip_serializing_if = "Option::is_none")]
    pub defined_in: Option<String>,

    /// DTMIs of the interfaces this one extends.
    #[serde(default)]
    pub extends: Vec<String>,

    /// DTMIs of the interfaces extending this one.
    #[serde(rename = "extendedBy", default)]
    pub extended_by: Vec<String>,

    /// Major version of the DTDL language the interface is written in.
    #[serde(rename = "languageMajorVersion", default = "default_language_major_version")]
    pub language_major_version: u32,
}

fn default_language_major_version() -> u32 {
    2
}

/// Fallback for entity kinds this crate does not model structurally
/// (telemetries, properties, commands, ...). Keeps every field so the
/// record can be re-serialized without loss.
#[derive(Clone, Debug, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct EntityRecord {
    /// DTMI of this entity.
    #[serde(rename = "Id")]
    pub id: String,

    /// The entity kind literal.
    #[serde(rename = "EntityKind")]
    pub entity_kind: String,

    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub properties: serde_json::Map<String, Value>,
}
