//! Locates report files under a directory tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::loader::ReportResult;

/// Default extension of report files (no leading dot).
pub const DEFAULT_EXTENSION: &str = "spat";

/// Recursively collect report files under `root` whose extension matches
/// `extension` (case-insensitive, no leading dot).
///
/// Paths come back sorted so load order, and with it every downstream
/// listing, is deterministic.
pub fn find_report_files(root: &Path, extension: &str) -> ReportResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    tracing::debug!(
        count = paths.len(),
        root = %root.display(),
        extension,
        "Discovered report files"
    );

    Ok(paths)
}
