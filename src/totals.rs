use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::content::read_lossy;

/// Size, line and char counts for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub size: u64,
    pub lines: u64,
    pub chars: u64,
}

/// Aggregate counts over a selection, plus the column width the tree
/// renderer uses to align per-file annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub size: u64,
    pub lines: u64,
    pub chars: u64,
    pub info_padding: usize,
}

/// Stats a single regular file: byte size from the filesystem, line and char
/// counts from one lossy-decoded read. A trailing line without a newline
/// still counts as a line; chars are counted on the decoded text, not on raw
/// bytes. Returns `None` for anything unreadable or not a regular file.
pub fn file_stats(path: &Path) -> Option<FileStats> {
    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    let text = read_lossy(path).ok()?;
    Some(FileStats {
        size: metadata.len(),
        lines: text.lines().count() as u64,
        chars: text.chars().count() as u64,
    })
}

/// Sums stats over `files` (relative to `root`) and computes the renderer's
/// info-column width. A file that cannot be read contributes nothing to the
/// sums but still widens the column, which depends only on the path shape.
pub fn calculate_totals(root: &Path, files: &[PathBuf]) -> Totals {
    let mut totals = Totals::default();
    for file in files {
        totals.info_padding = totals.info_padding.max(info_padding_for(file));
        match file_stats(&root.join(file)) {
            Some(stats) => {
                totals.size += stats.size;
                totals.lines += stats.lines;
                totals.chars += stats.chars;
            }
            None => debug!("skipping unreadable file in totals: {}", file.display()),
        }
    }
    totals
}

/// `(depth + 2) * 4 + basename length`: four columns per tree level (prefix
/// plus glyph) and the name itself.
fn info_padding_for(file: &Path) -> usize {
    let depth = file.components().count().saturating_sub(1);
    let basename = file
        .file_name()
        .map(|name| name.to_string_lossy().chars().count())
        .unwrap_or(0);
    (depth + 2) * 4 + basename
}

/// Renders `n` with thousands separators: `1234567` becomes `"1,234,567"`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(path, contents).expect("failed to write fixture file");
    }

    #[test]
    fn totals_over_a_small_selection() {
        let dir = tempdir().expect("failed to create temp dir");
        write_file(&dir.path().join("a.txt"), "hi");
        write_file(&dir.path().join("sub/b.txt"), "x\ny\n");

        let files = vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")];
        let totals = calculate_totals(dir.path(), &files);

        assert_eq!(totals.size, 6);
        assert_eq!(totals.lines, 3);
        assert_eq!(totals.chars, 6);
        // a.txt: (0 + 2) * 4 + 5 = 13; sub/b.txt: (1 + 2) * 4 + 5 = 17.
        assert_eq!(totals.info_padding, 17);
    }

    #[test]
    fn empty_selection_yields_zeroes() {
        let dir = tempdir().expect("failed to create temp dir");
        assert_eq!(calculate_totals(dir.path(), &[]), Totals::default());
    }

    #[test]
    fn unreadable_file_still_widens_the_column() {
        let dir = tempdir().expect("failed to create temp dir");
        let files = vec![PathBuf::from("missing.txt")];
        let totals = calculate_totals(dir.path(), &files);
        assert_eq!(totals.size, 0);
        assert_eq!(totals.lines, 0);
        assert_eq!(totals.chars, 0);
        assert_eq!(totals.info_padding, 8 + "missing.txt".len());
    }

    #[test]
    fn trailing_partial_line_counts_as_a_line() {
        let dir = tempdir().expect("failed to create temp dir");
        write_file(&dir.path().join("f.txt"), "one\ntwo");
        let stats = file_stats(&dir.path().join("f.txt")).expect("stats failed");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.chars, 7);
    }

    #[test]
    fn stats_of_a_directory_are_none() {
        let dir = tempdir().expect("failed to create temp dir");
        assert_eq!(file_stats(dir.path()), None);
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
