use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;

/// An ordered set of gitignore-style rules.
///
/// Later rules override earlier ones, `!` re-includes, a leading `/` anchors
/// a pattern to the root, a trailing `/` restricts it to directories, and
/// `**` is the only wildcard that crosses a path separator. Blank lines and
/// `#` comments are tolerated, so the raw lines of a `.gitignore` file can
/// be passed through untouched.
pub struct PatternSpec {
    matcher: Gitignore,
}

impl PatternSpec {
    /// Builds a spec from pattern lines, in order.
    ///
    /// A line the glob compiler rejects is dropped rather than propagated;
    /// one bad pattern never invalidates the rest of the set.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if builder.add_line(None, pattern).is_err() {
                debug!("skipping malformed pattern: {pattern:?}");
            }
        }
        let matcher = builder.build().unwrap_or_else(|err| {
            debug!("pattern set failed to compile, matching nothing: {err}");
            Gitignore::empty()
        });
        Self { matcher }
    }

    /// Whether `rel_path` is matched when evaluated against its full
    /// relative path, the mode used for exclusion.
    ///
    /// A match on any ancestor directory counts too, so `build/` takes out
    /// everything beneath `build` — unless a later negation re-includes the
    /// path itself.
    pub fn matches_path(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Whether `name` is matched when evaluated as a bare basename, the mode
    /// used for target selection (`*.rs` picks Rust files at any depth).
    pub fn matches_name(&self, name: &str) -> bool {
        self.matcher.matched(name, false).is_ignore()
    }
}
