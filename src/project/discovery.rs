//! Recursive discovery of JSON documents under a directory root.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

/// Collect every `.json` file under `directory`, recursively.
///
/// Returns paths in filesystem enumeration order, recursing depth-first.
/// A missing directory is not fatal: it is logged and yields an empty set,
/// which callers treat as "nothing to do". Non-JSON files are skipped
/// silently. Symlink cycles are not guarded against.
pub fn search_for_json_files(directory: &Path) -> Vec<PathBuf> {
    if !directory.exists() {
        error!(path = %directory.display(), "not a valid filepath");
        return Vec::new();
    }

    let mut files = Vec::new();
    collect_json_files(directory, &mut files);
    files
}

fn collect_json_files(dir: &Path, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(cause) => {
            error!(path = %dir.display(), %cause, "failed to read directory");
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(cause) => {
                error!(path = %dir.display(), %cause, "failed to read directory entry");
                continue;
            }
        };

        if path.is_dir() {
            collect_json_files(&path, results);
        } else if path.extension().and_then(OsStr::to_str) == Some("json") {
            results.push(path);
        }
    }
}
