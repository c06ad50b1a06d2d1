//! Strip file discovery.
//!
//! Expands the paths given on the command line into a list of strip files.
//! Files are taken as-is; directories are walked recursively for
//! `.strip.yaml` / `.strip.yml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GradError, Result};

/// File name suffixes recognised as strip files.
pub const STRIP_SUFFIXES: [&str; 2] = [".strip.yaml", ".strip.yml"];

/// Check whether a path looks like a strip file.
pub fn is_strip_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| STRIP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

/// Scan a directory for strip files, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_strip_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}

/// Expand files and directories into the strip files to build.
///
/// Missing paths are an error. Duplicates are dropped, keeping the first
/// occurrence.
pub fn discover_strip_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut result: Vec<PathBuf> = Vec::new();

    for path in paths {
        let found = if path.is_dir() {
            scan_directory(path)
        } else if path.exists() {
            vec![path.clone()]
        } else {
            return Err(GradError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        };

        for file in found {
            if !result.contains(&file) {
                result.push(file);
            }
        }
    }

    Ok(result)
}
