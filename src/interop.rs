//! Engine interop boundary.
//!
//! The DTDL grammar engine is an external collaborator: it takes a JSON
//! payload, returns a serialized object model, and raises failures whose
//! message may itself JSON-encode a [`ModelingException`]. This module pins
//! that boundary down as a trait plus a discriminated failure type, so that
//! the rest of the crate never inspects raw strings to decide what went
//! wrong.
//!
//! [`ModelingException`]: crate::error::ModelingException

use thiserror::Error;

/// External DTDL parsing/resolution engine.
///
/// Implementations wrap whatever actually evaluates DTDL (an interop layer,
/// a native library, a test stub). `parse` is the only operation the
/// pipelines call; acquisition and configuration of the engine are the
/// caller's concern.
pub trait Parser {
    /// Parse a JSON payload (a single document or an array of documents) and
    /// return the serialized `DtdlObjectModel` on success.
    fn parse(&self, input: &str) -> Result<String, InteropError>;

    /// Human-readable version string of the underlying engine.
    fn parser_version(&self) -> String;
}

/// Failure crossing the engine boundary.
///
/// `Engine` carries a failure the engine raised deliberately; its message may
/// JSON-encode a structured `ModelingException` and is decoded exactly once,
/// by [`handle_error`]. `Unexpected` is everything else (engine crashed,
/// interop unavailable) and is never classified, only propagated.
///
/// [`handle_error`]: crate::error::handle_error
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InteropError {
    /// Failure raised by the engine itself.
    #[error("{message}")]
    Engine { message: String },

    /// Non-domain failure; indicates a defect at the boundary, not bad input.
    #[error("unexpected parser failure: {0}")]
    Unexpected(String),
}

impl InteropError {
    /// Create an engine-raised failure.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Create an unexpected boundary failure.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
