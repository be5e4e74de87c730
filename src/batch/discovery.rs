//! Input directory listing.

use anyhow::{Context, Result};
use clubber_common::paths::has_extension;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

/// List the names in `dir` that end in one of `extensions`, sorted.
///
/// Only the top level of `dir` is read. Names are compared case-insensitively
/// against the extensions and sorted by `OsStr` order (byte order on Unix,
/// which for UTF-8 names is codepoint order). Names that are not valid UTF-8
/// are kept as-is so they still take their place in the pairing.
///
/// # Errors
///
/// Fails if the directory cannot be read, e.g. it does not exist.
pub fn list_media_files<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<OsString>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let name = entry.file_name();

        if has_extension(&name.to_string_lossy(), extensions) {
            names.push(name);
        }
    }

    names.sort();

    debug!("Found {} matching files in {:?}", names.len(), dir);

    Ok(names)
}
