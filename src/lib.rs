//! Turn a directory of source files into a single text artifact: an ASCII
//! directory tree and/or the concatenated file contents wrapped in fenced
//! blocks, ready to paste elsewhere.
//!
//! The library covers pattern matching, file selection, totals, tree
//! building/rendering and content aggregation. The binary layers argument
//! parsing, the continuation prompt and clipboard output on top.

pub mod content;
pub mod patterns;
pub mod totals;
pub mod tree;
pub mod walker;

pub use patterns::PatternSpec;
pub use walker::select_files;

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a scan before it produces anything.
///
/// Only the root itself can fail a scan; unreadable entries below it are
/// skipped during traversal and never surface here.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("root path not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, WalkError>;
