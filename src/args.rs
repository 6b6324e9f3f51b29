use clap::{Parser, ValueEnum};

/// Render a directory as an ASCII tree and/or concatenated file contents,
/// ready to paste into another tool.
#[derive(Parser, Debug)]
#[command(name = "code2text", author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (default: current directory).
    #[arg(default_value = ".")]
    pub path: String,

    /// What to emit: file contents, the directory tree, or both.
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Glob patterns a file's basename must match to be included.
    #[arg(short, long, value_name = "GLOB", default_value = "*")]
    pub target: Vec<String>,

    /// Gitignore-style patterns to exclude, on top of the scanned
    /// directory's own .gitignore.
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Show per-file size, line and char counts in the tree, plus totals.
    #[arg(short, long)]
    pub info: bool,

    /// Copy the result to the clipboard.
    #[arg(short, long)]
    pub copy: bool,

    /// Fence string wrapped around the tree and each file's contents.
    #[arg(short, long, default_value = "```")]
    pub sep: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// File contents only.
    Code,
    /// Directory tree only.
    Tree,
    /// Tree first, then file contents.
    All,
}

impl Mode {
    pub fn includes_tree(self) -> bool {
        matches!(self, Mode::Tree | Mode::All)
    }

    pub fn includes_code(self) -> bool {
        matches!(self, Mode::Code | Mode::All)
    }
}
