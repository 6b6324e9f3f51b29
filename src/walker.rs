use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::patterns::PatternSpec;
use crate::{Result, WalkError};

/// Walks `root` and returns the relative path of every regular file that
/// clears both filters: not matched by `exclude` (evaluated against the full
/// relative path, ancestors included) and matched by `target` (evaluated
/// against the basename).
///
/// Traversal is depth-first and bottom-up: within a directory, every
/// subdirectory is fully visited before the directory's own files are
/// appended. The returned order is the traversal order; callers wanting
/// deterministic output sort the result themselves.
///
/// Only problems with the root itself are errors. Unreadable entries further
/// down are skipped, so one bad file never blocks the rest of the scan.
pub fn select_files(
    root: &Path,
    target: &PatternSpec,
    exclude: &PatternSpec,
) -> Result<Vec<PathBuf>> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(WalkError::RootNotFound(root.to_path_buf()));
        }
        Err(err) => return Err(WalkError::Io(err)),
    };
    if !metadata.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    walk_directory(root, root, target, exclude, &mut files);
    Ok(files)
}

fn walk_directory(
    root: &Path,
    directory: &Path,
    target: &PatternSpec,
    exclude: &PatternSpec,
    files: &mut Vec<PathBuf>,
) {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("skipping unreadable directory {}: {err}", directory.display());
            return;
        }
    };

    let mut subdirs = Vec::new();
    let mut plain_files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping entry in {}: {err}", directory.display());
                continue;
            }
        };
        // `file_type` does not follow symlinks, so a link is neither a
        // directory to descend into nor a file to keep.
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                debug!("skipping {}: {err}", entry.path().display());
                continue;
            }
        };
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if file_type.is_file() {
            plain_files.push(entry.path());
        }
    }

    for subdir in &subdirs {
        walk_directory(root, subdir, target, exclude, files);
    }

    for path in plain_files {
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        if exclude.matches_path(relative, false) {
            continue;
        }
        let name = match relative.file_name() {
            Some(name) => name.to_string_lossy(),
            None => continue,
        };
        if !target.matches_name(&name) {
            continue;
        }
        files.push(relative.to_path_buf());
    }
}
