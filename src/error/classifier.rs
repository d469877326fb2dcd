//! Failure classifier for the engine boundary.
//!
//! Decodes the (possibly structured) message of an engine-raised failure
//! into a typed [`ModelingException`]. Every other component treats
//! exceptions as already-typed values; this is the only decode site.

use serde_json::Value;
use tracing::{debug, error};

use super::exception::{
    ModelingError, ModelingException, UNKNOWN_ERROR_VALIDATION_ID,
    UNPARSEABLE_EXCEPTION_VALIDATION_ID,
};
use crate::interop::InteropError;

/// Classify a failure raised by the engine.
///
/// - An [`InteropError::Engine`] whose message JSON-encodes a
///   [`ModelingException`] is returned as-is.
/// - A message that is valid JSON but not a modeling exception yields a
///   synthetic `Parsing` exception with [`UNKNOWN_ERROR_VALIDATION_ID`].
/// - A message that is not valid JSON yields a synthetic `Parsing` exception
///   with [`UNPARSEABLE_EXCEPTION_VALIDATION_ID`].
/// - An [`InteropError::Unexpected`] is not a domain failure: it is logged
///   and handed back in `Err` for the caller to propagate unchanged.
pub fn handle_error(err: InteropError) -> Result<ModelingException, InteropError> {
    let InteropError::Engine { message } = &err else {
        error!(failure = %err, "non-domain failure from parser");
        return Err(err);
    };

    match serde_json::from_str::<Value>(message) {
        Ok(payload) => {
            if is_modeling_exception(&payload) {
                match serde_json::from_value::<ModelingException>(payload) {
                    Ok(exception) => return Ok(exception),
                    Err(cause) => {
                        debug!(%cause, "exception payload had a known kind but malformed errors")
                    }
                }
            } else {
                error!("unknown exception shape from parser");
            }
            Ok(synthetic_exception(UNKNOWN_ERROR_VALIDATION_ID, message))
        }
        Err(cause) => {
            error!(%cause, "failed to decode parser failure message");
            Ok(synthetic_exception(UNPARSEABLE_EXCEPTION_VALIDATION_ID, message))
        }
    }
}

/// Check if a raised failure decodes to a `Resolution` exception.
///
/// Total: any failure that is not a decodable resolution exception,
/// including non-domain failures and garbage payloads, yields `false`.
pub fn is_resolution_exception(err: &InteropError) -> bool {
    match err {
        InteropError::Engine { message } => serde_json::from_str::<ModelingException>(message)
            .map(|exception| exception.is_resolution())
            .unwrap_or(false),
        InteropError::Unexpected(_) => false,
    }
}

/// Structural check that an already-decoded JSON value is a modeling
/// exception: an object whose `ExceptionKind` is one of the two known
/// literals. No decoding is performed.
pub fn is_modeling_exception(value: &Value) -> bool {
    matches!(
        value.get("ExceptionKind").and_then(Value::as_str),
        Some("Parsing" | "Resolution")
    )
}

fn synthetic_exception(validation_id: &str, payload: &str) -> ModelingException {
    ModelingException::Parsing {
        errors: vec![ModelingError {
            cause: "Parser failure could not be decoded as a modeling exception".to_string(),
            action: "Inspect the raw payload in Value; if the engine should have reported a structured exception, report a defect against the interop boundary".to_string(),
            validation_id: validation_id.to_string(),
            value: payload.to_string(),
        }],
    }
}
