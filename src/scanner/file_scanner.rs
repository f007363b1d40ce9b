//! Gitignore-aware file discovery
//!
//! Walks a directory tree top-down, pruning excluded directory names before
//! descent, and yields `FileRecord`s for files passing the extension/name
//! allow-list and the ignore filter. A decode or I/O failure on one file is
//! logged and that file is skipped; it never aborts the scan. A scan that
//! matches nothing is a signal (`ScanResult::is_empty`), not an error.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::gitignore::GitIgnoreFilter;
use crate::config::ScanConfig;
use crate::types::{FileKind, FileRecord, Result, ScanResult};

pub struct FileScanner {
    root: PathBuf,
    config: ScanConfig,
    ignore: Arc<GitIgnoreFilter>,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P, config: ScanConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        let ignore = Arc::new(GitIgnoreFilter::new(&root));
        Self {
            root,
            config,
            ignore,
        }
    }

    /// Walk the tree and read every accepted file.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut records = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        // Prune excluded directories before descent so nothing beneath them
        // is ever visited, let alone read.
        let root = self.root.clone();
        let skip_dirs: Vec<String> = self
            .config
            .skip_dirs
            .iter()
            .chain(self.config.phase_dirs.iter())
            .cloned()
            .collect();
        let ignore = Arc::clone(&self.ignore);
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if skip_dirs.iter().any(|d| d == name.as_ref()) {
                debug!("Pruning directory: {}", entry.path().display());
                return false;
            }
            if let Ok(rel) = entry.path().strip_prefix(&root) {
                if ignore.is_ignored(rel, true) {
                    debug!("Pruning ignored directory: {}", entry.path().display());
                    return false;
                }
            }
            true
        });

        for entry in builder.build().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(kind) = self.classify(path) else {
                continue;
            };

            let rel = match path.strip_prefix(&self.root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let relative_path = normalize(rel);

            if self.ignore.is_ignored(rel, false) {
                debug!("Skipping ignored file: {}", relative_path);
                continue;
            }

            if self.matches_exclude_glob(&relative_path) {
                debug!("Skipping excluded file: {}", relative_path);
                continue;
            }

            match std::fs::read_to_string(path) {
                Ok(content) => records.push(FileRecord {
                    relative_path,
                    content,
                    kind,
                }),
                Err(e) => {
                    warn!("Error reading file {}: {}", path.display(), e);
                }
            }
        }

        info!("Read {} candidate files under {}", records.len(), self.root.display());

        Ok(ScanResult {
            records,
            root: self.root.clone(),
        })
    }

    /// Allow-list check: schema file names first (exact match), then the
    /// extension list.
    fn classify(&self, path: &Path) -> Option<FileKind> {
        let name = path.file_name()?.to_string_lossy();
        if self.config.schema_files.iter().any(|f| f == name.as_ref()) {
            return Some(FileKind::SchemaDescriptor);
        }
        let ext = path.extension()?.to_string_lossy();
        if self.config.extensions.iter().any(|e| e == ext.as_ref()) {
            return Some(FileKind::Source);
        }
        None
    }

    fn matches_exclude_glob(&self, relative_path: &str) -> bool {
        self.config.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(relative_path))
                .unwrap_or(false)
        })
    }
}

fn normalize(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
