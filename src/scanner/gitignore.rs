//! Repository ignore-file handling
//!
//! Compiles the `.gitignore` at the scan root into a matcher over relative
//! paths. Pattern order is significant: a `!`-prefixed pattern later in the
//! file re-includes paths excluded by earlier patterns. A missing or
//! unreadable ignore file yields a matcher that excludes nothing.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::debug;

pub struct GitIgnoreFilter {
    gitignore: Option<Gitignore>,
}

impl GitIgnoreFilter {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let gitignore_path = root.as_ref().join(".gitignore");

        let gitignore = if gitignore_path.exists() {
            let mut builder = GitignoreBuilder::new(root.as_ref());
            builder.add(&gitignore_path);
            match builder.build() {
                Ok(gi) => Some(gi),
                Err(e) => {
                    debug!("Ignoring unreadable .gitignore: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self { gitignore }
    }

    /// Whether the path (relative to the scan root) is excluded.
    /// `is_dir` selects directory-only pattern semantics (trailing slash).
    pub fn is_ignored<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> bool {
        match &self.gitignore {
            Some(gi) => gi.matched(path.as_ref(), is_dir).is_ignore(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn filter_for(patterns: &str) -> (TempDir, GitIgnoreFilter) {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".gitignore"), patterns).unwrap();
        let filter = GitIgnoreFilter::new(tmp.path());
        (tmp, filter)
    }

    #[test]
    fn test_no_ignore_file_excludes_nothing() {
        let tmp = TempDir::new().unwrap();
        let filter = GitIgnoreFilter::new(tmp.path());
        assert!(!filter.is_ignored("anything.ts", false));
    }

    #[test]
    fn test_glob_pattern() {
        let (_tmp, filter) = filter_for("*.log\n");
        assert!(filter.is_ignored("debug.log", false));
        assert!(filter.is_ignored("deep/nested/debug.log", false));
        assert!(!filter.is_ignored("main.ts", false));
    }

    #[test]
    fn test_negation_order_is_significant() {
        let (_tmp, filter) = filter_for("*.ts\n!keep.ts\n");
        assert!(filter.is_ignored("drop.ts", false));
        assert!(!filter.is_ignored("keep.ts", false));
    }

    #[test]
    fn test_negation_before_exclude_loses() {
        let (_tmp, filter) = filter_for("!keep.ts\n*.ts\n");
        assert!(filter.is_ignored("keep.ts", false));
    }

    #[test]
    fn test_directory_only_pattern() {
        let (_tmp, filter) = filter_for("generated/\n");
        assert!(filter.is_ignored("generated", true));
        assert!(!filter.is_ignored("generated", false));
    }
}
