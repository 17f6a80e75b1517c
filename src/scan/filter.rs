//! Name-based exclusion rules for the directory scanner.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Directory names excluded from scanning by default.
///
/// Covers virtualenvs, VCS state, bytecode and dependency caches, build
/// output, coverage artifacts, IDE state, and log directories.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".venv",
    ".git",
    "__pycache__",
    "node_modules",
    "build",
    "dist",
    "target",
    "coverage",
    ".idea",
    ".vscode",
    "logs",
];

/// File names excluded from scanning by default.
///
/// Covers ignore files, secret env files, lockfiles, and OS metadata.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[
    ".gitignore",
    ".env",
    "poetry.lock",
    "package-lock.json",
    "Cargo.lock",
    ".DS_Store",
];

/// Two disjoint sets of names to exclude: one matched against directory
/// names, one against file names. Static for the lifetime of the
/// [`PathFilter`] built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl IgnoreSet {
    /// Creates an ignore set from explicit name lists.
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `name` is an ignored directory name.
    pub fn contains_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Returns true if `name` is an ignored file name.
    pub fn contains_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Iterates over the ignored directory names in sorted order.
    pub fn dir_names(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    /// The documented default lists ([`DEFAULT_IGNORED_DIRS`] and
    /// [`DEFAULT_IGNORED_FILES`]).
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORED_DIRS.iter().copied(),
            DEFAULT_IGNORED_FILES.iter().copied(),
        )
    }
}

/// Pure predicate deciding whether a filesystem entry is excluded from
/// analysis.
///
/// Matching is exact and case-sensitive on the entry name. Names that fit
/// neither rule pass through as "not ignored".
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignore: IgnoreSet,
}

impl PathFilter {
    /// Creates a filter over the given ignore set.
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Returns true if the entry should be excluded.
    ///
    /// Directories are matched against the ignored directory names, files
    /// against the ignored file names.
    pub fn is_ignored(&self, entry_name: &str, is_directory: bool) -> bool {
        if is_directory {
            self.ignore.contains_dir(entry_name)
        } else {
            self.ignore.contains_file(entry_name)
        }
    }

    /// Returns true if any path segment exactly equals an ignored
    /// directory name.
    ///
    /// Backstop for files whose ancestors were never pruned at the
    /// directory level, e.g. symlinked trees or pre-enumerated path lists.
    pub fn path_has_ignored_component(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(segment) => segment
                .to_str()
                .is_some_and(|name| self.ignore.contains_dir(name)),
            _ => false,
        })
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(IgnoreSet::default())
    }
}
