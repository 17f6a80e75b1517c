//! Top-down directory traversal with subtree pruning.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::scan::filter::PathFilter;

/// Result of a directory scan.
///
/// An empty scan is a distinguished outcome, not an error: a directory
/// containing only ignored entries yields [`ScanOutcome::NoRelevantFiles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Surviving file paths in walk order.
    Files(Vec<PathBuf>),
    /// The walk completed but every entry was filtered out.
    NoRelevantFiles,
}

impl ScanOutcome {
    /// Returns the file list, or an empty slice for the sentinel.
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Files(files) => files,
            Self::NoRelevantFiles => &[],
        }
    }
}

/// The directory walk could not proceed.
///
/// Raised for a nonexistent root, permission errors, or any other I/O
/// fault during traversal. A single failure aborts the whole scan.
#[derive(Debug, Error)]
#[error("cannot scan directory {}", .root.display())]
pub struct ScanError {
    /// Root path the scan was started from.
    pub root: PathBuf,
    /// Underlying traversal failure.
    #[source]
    pub source: walkdir::Error,
}

/// Walks a project tree and collects the files that survive filtering.
///
/// Ignored directories are pruned before the walk descends into them, so
/// nothing beneath an ignored directory is ever visited. Entries at each
/// level are visited in file-name order, making the result deterministic
/// for a fixed tree. Symlinks are not followed.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    filter: PathFilter,
}

impl Scanner {
    /// Creates a scanner using the given filter.
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Scans `root` top-down and returns the surviving file paths.
    ///
    /// Returns [`ScanOutcome::NoRelevantFiles`] when nothing survives, and
    /// [`ScanError`] when the walk itself fails.
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome, ScanError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.should_descend(entry));

        for entry in walker {
            let entry = entry.map_err(|source| ScanError {
                root: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.filter.is_ignored(&name, false) {
                continue;
            }
            // Backstop for files reached through a path the directory-level
            // pruning never saw (symlinked or pre-enumerated trees).
            if self.filter.path_has_ignored_component(entry.path()) {
                continue;
            }

            files.push(entry.into_path());
        }

        debug!(root = %root.display(), count = files.len(), "Scan complete");

        if files.is_empty() {
            Ok(ScanOutcome::NoRelevantFiles)
        } else {
            Ok(ScanOutcome::Files(files))
        }
    }

    /// Pruning predicate: an ignored directory (and its whole subtree) is
    /// dropped from the pending walk list before being descended into.
    ///
    /// The root itself is exempt so a project directory that happens to
    /// carry an ignored name can still be scanned.
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !self.filter.is_ignored(&name, true)
    }
}
