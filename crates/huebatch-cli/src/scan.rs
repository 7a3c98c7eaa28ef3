//! Input folder scanning.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// File name suffixes accepted by the scan. Matching is case-sensitive.
const SUPPORTED_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Collect the supported image files directly inside `folder`.
///
/// The scan does not recurse; subdirectories and their contents are
/// ignored. Results are sorted by path so a batch run is deterministic.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        bail!(
            "input folder does not exist or is not a directory: {}",
            folder.display()
        );
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_supported(entry.file_name().to_str().unwrap_or_default()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

fn is_supported(name: &str) -> bool {
    SUPPORTED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
