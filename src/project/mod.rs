//! Directory pipelines: model assembly and per-file validation.
//!
//! Two ways to drive the engine over a directory tree:
//! - [`parse_directories`] combines every discovered document into a single
//!   parse request and yields one object model for the whole tree.
//! - [`validate_directories`] submits each file on its own, with a
//!   caller-controlled tolerance for resolution failures.
//!
//! [`parse_dtdl`] is the single conversion point from a raised engine
//! failure to a typed result; everything above it sees either a model, a
//! [`ModelingException`], or a propagated non-domain failure.

mod combiner;
mod discovery;

pub use combiner::{combine_json, read_json_file};
pub use discovery::search_for_json_files;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::error::{ModelingException, handle_error, is_resolution_exception};
use crate::interop::{InteropError, Parser};
use crate::model::DtdlObjectModel;


/// Failure of a [`parse_dtdl`] request.
#[derive(Debug, Error)]
pub enum DtdlParseError {
    /// Typed modeling failure decoded from the engine.
    #[error("{0}")]
    Modeling(ModelingException),

    /// Non-domain failure crossing the interop boundary, propagated verbatim.
    #[error(transparent)]
    Unexpected(#[from] InteropError),
}

/// Submit a single JSON payload to the engine and decode the object model.
///
/// Any failure the engine raises is routed through the classifier and
/// surfaced as [`DtdlParseError::Modeling`]; a result payload that is not a
/// valid `DtdlObjectModel` document is classified the same way. Only
/// non-domain failures escape as [`DtdlParseError::Unexpected`].
pub fn parse_dtdl(json: &str, parser: &dyn Parser) -> Result<DtdlObjectModel, DtdlParseError> {
    let raised = match parser.parse(json) {
        Ok(payload) => match serde_json::from_str::<DtdlObjectModel>(&payload) {
            Ok(model) => {
                info!("successfully parsed");
                return Ok(model);
            }
            // an undecodable result payload is classified like a raised failure
            Err(cause) => InteropError::engine(cause.to_string()),
        },
        Err(raised) => raised,
    };

    error!(failure = %raised, "error parsing");
    match handle_error(raised) {
        Ok(exception) => Err(DtdlParseError::Modeling(exception)),
        Err(unexpected) => Err(DtdlParseError::Unexpected(unexpected)),
    }
}

/// Parse every JSON document under `directory` as one combined request.
///
/// Returns `Ok(None)` when there is nothing to parse or the batch cannot be
/// assembled: no files found, a file failed to read or parse as JSON, or the
/// engine reported a modeling exception (logged, then swallowed — callers
/// only ever see a populated model or absence). `Err` is reserved for
/// non-domain failures.
pub fn parse_directories(
    directory: &Path,
    parser: &dyn Parser,
) -> Result<Option<DtdlObjectModel>, InteropError> {
    info!(version = %parser.parser_version(), "parser ready");
    info!(path = %directory.display(), "parsing DTDL");

    let filepaths = search_for_json_files(directory);
    if filepaths.is_empty() {
        return Ok(None);
    }
    info!(count = filepaths.len(), files = ?filepaths, "found JSON files");

    let Some(combined) = combine_json(&filepaths) else {
        return Ok(None);
    };
    let payload = serde_json::to_string(&combined)
        .map_err(|cause| InteropError::unexpected(format!("combined payload: {cause}")))?;

    match parse_dtdl(&payload, parser) {
        Ok(model) => {
            info!("all files parsed");
            debug!(entities = ?model.keys().collect::<Vec<_>>(), "model entities");
            let interfaces = model
                .values()
                .filter(|entity| entity.as_interface().is_some())
                .count();
            info!(interfaces, "number of interfaces");
            Ok(Some(model))
        }
        Err(DtdlParseError::Modeling(exception)) => {
            error!(%exception, "error while parsing directories");
            Ok(None)
        }
        Err(DtdlParseError::Unexpected(unexpected)) => Err(unexpected),
    }
}

/// Validate every JSON document under `directory`, one engine call per file.
///
/// `include_resolution_exceptions` controls whether resolution failures
/// count as errors: per-file validation routinely hits unresolved
/// cross-file references, so callers may opt to ignore them by passing
/// `false`. Parsing failures are never tolerated. Stops at the first
/// unrecoverable failure.
///
/// Returns `Ok(true)` only if at least one file was found and every file
/// either validated cleanly or raised an ignorable resolution exception.
pub fn validate_directories(
    directory: &Path,
    parser: &dyn Parser,
    include_resolution_exceptions: bool,
) -> Result<bool, InteropError> {
    info!(version = %parser.parser_version(), "parser ready");
    info!(path = %directory.display(), "validating DTDL");

    let filepaths = search_for_json_files(directory);
    if filepaths.is_empty() {
        return Ok(false);
    }
    info!(count = filepaths.len(), files = ?filepaths, "found JSON files");

    for filepath in &filepaths {
        if !validate_file(filepath, parser, include_resolution_exceptions)? {
            return Ok(false);
        }
    }

    info!("all files validated");
    Ok(true)
}

fn validate_file(
    filepath: &Path,
    parser: &dyn Parser,
    include_resolution_exceptions: bool,
) -> Result<bool, InteropError> {
    let text = match fs::read_to_string(filepath) {
        Ok(text) => text,
        Err(cause) => {
            error!(path = %filepath.display(), %cause, "unreadable file");
            return Ok(false);
        }
    };

    match parser.parse(&text) {
        Ok(_) => {
            info!(path = %filepath.display(), "successfully validated");
            Ok(true)
        }
        Err(raised) => {
            if !include_resolution_exceptions && is_resolution_exception(&raised) {
                info!(path = %filepath.display(), "successfully validated (resolution exception ignored)");
                return Ok(true);
            }

            error!(path = %filepath.display(), "error parsing file");
            match handle_error(raised) {
                Ok(exception) => {
                    error!(%exception, "validation failed");
                    Ok(false)
                }
                Err(unexpected) => Err(unexpected),
            }
        }
    }
}
