use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

/// Normalizes a path string for display: backslashes become `/` and any run
/// of separators collapses to a single one. Idempotent.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        normalized.push(ch);
    }
    normalized
}

/// Reads a file as text under the lossy-decode policy: invalid UTF-8
/// sequences are replaced with U+FFFD instead of failing the file. All
/// decoded text in the program comes through here, so counts and aggregated
/// contents always agree on what a file says.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Concatenates the selected files in the given order, each wrapped as a
/// fenced block labeled with its normalized relative path:
///
/// ```text
/// {fence}{path}
/// {contents}
/// {fence}
/// ```
///
/// A file that cannot be read is skipped with a warning; one bad file never
/// aborts the aggregation.
pub fn aggregate_contents(root: &Path, files: &[PathBuf], fence: &str) -> String {
    let mut content = String::new();
    for file in files {
        let text = match read_lossy(&root.join(file)) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping unreadable file {}: {err}", file.display());
                continue;
            }
        };
        let label = normalize_path(&file.to_string_lossy());
        content.push_str(&format!("\n{fence}{label}\n"));
        content.push_str(&text);
        content.push_str(&format!("\n{fence}\n"));
    }
    content
}
