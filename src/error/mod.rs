//! Modeling exception handling.
//!
//! The engine communicates structured failures by JSON-encoding them inside
//! the message of the failure it raises. This module is the sole place that
//! encoding is undone:
//! - the wire contract types ([`ModelingException`], [`ModelingError`])
//! - the classifier ([`handle_error`]) that turns a raised failure into
//!   exactly one typed exception, with synthetic fallbacks for payloads that
//!   cannot be decoded
//! - structural predicates for already-decoded values

mod classifier;
mod exception;

pub use classifier::{handle_error, is_modeling_exception, is_resolution_exception};
pub use exception::{
    ModelingError, ModelingException, UNKNOWN_ERROR_VALIDATION_ID,
    UNPARSEABLE_EXCEPTION_VALIDATION_ID,
};
