//! Exception wire contract.
//!
//! Field names are bit-exact with the payloads the engine emits; consumers
//! on the other side of the wire parse exactly this shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved validation id: the failure payload was valid JSON but not a
/// modeling exception.
pub const UNKNOWN_ERROR_VALIDATION_ID: &str = "unknown:error";

/// Reserved validation id: the failure payload was not valid JSON at all.
pub const UNPARSEABLE_EXCEPTION_VALIDATION_ID: &str = "error:unparseableException";

/// Structured failure reported by the DTDL engine.
///
/// A closed two-variant union, tagged on the wire by `ExceptionKind`:
/// parsing failures (the input violates the DTDL grammar) and resolution
/// failures (the input is well-formed but cross-references cannot be
/// resolved). Synthetic fallbacks produced by the classifier reuse the
/// `Parsing` kind with a reserved [`ModelingError::validation_id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ExceptionKind")]
pub enum ModelingException {
    /// The input is syntactically or structurally invalid DTDL.
    Parsing {
        #[serde(rename = "Errors")]
        errors: Vec<ModelingError>,
    },

    /// The input parsed but references could not be resolved.
    Resolution {
        #[serde(rename = "Errors")]
        errors: Vec<ModelingError>,
    },
}

impl ModelingException {
    /// The individual errors carried by this exception.
    pub fn errors(&self) -> &[ModelingError] {
        match self {
            Self::Parsing { errors } | Self::Resolution { errors } => errors,
        }
    }

    /// Check if this is a parsing exception.
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Parsing { .. })
    }

    /// Check if this is a resolution exception.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// The `ExceptionKind` literal as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parsing { .. } => "Parsing",
            Self::Resolution { .. } => "Resolution",
        }
    }
}

impl fmt::Display for ModelingException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exception ({} error(s))", self.kind(), self.errors().len())
    }
}

/// A single error inside a [`ModelingException`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelingError {
    /// What went wrong.
    #[serde(rename = "Cause")]
    pub cause: String,

    /// Remediation hint for the author of the offending input.
    #[serde(rename = "Action")]
    pub action: String,

    /// Stable identifier of the failing rule.
    #[serde(rename = "ValidationID")]
    pub validation_id: String,

    /// The offending input fragment or raw payload.
    #[serde(rename = "Value")]
    pub value: String,
}
