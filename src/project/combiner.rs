//! Combines independently-authored JSON documents into one parse request.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::error;

/// Read and parse one file as JSON. Logs the path and cause on failure.
pub fn read_json_file(filepath: &Path) -> Option<Value> {
    let text = match fs::read_to_string(filepath) {
        Ok(text) => text,
        Err(cause) => {
            error!(path = %filepath.display(), %cause, "unreadable file");
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(json) => Some(json),
        Err(cause) => {
            error!(path = %filepath.display(), %cause, "invalid JSON");
            None
        }
    }
}

/// Parse every file into an ordered collection of raw documents.
///
/// Strict fail-fast: the first unreadable or invalid file aborts the whole
/// combination and no partial results are returned.
pub fn combine_json(filepaths: &[PathBuf]) -> Option<Vec<Value>> {
    let mut combined = Vec::with_capacity(filepaths.len());
    for filepath in filepaths {
        combined.push(read_json_file(filepath)?);
    }
    Some(combined)
}
