//! Core types shared by the traversal operations.

use serde::Serialize;

use super::entity::PathEntity;

/// Options controlling recursive traversal.
///
/// # Examples
///
/// ```
/// use pathent::WalkOptions;
///
/// let options = WalkOptions::default();
/// assert!(options.follow_symlinks);
///
/// let options = options.with_follow_symlinks(false);
/// assert!(!options.follow_symlinks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Classify symlinks by their targets. When false, symlinks are skipped.
    pub follow_symlinks: bool,
}

impl WalkOptions {
    /// Set whether symlinks are followed.
    #[must_use]
    pub const fn with_follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}

/// One directory produced by a walk: its path and its direct regular files.
///
/// # Examples
///
/// ```
/// use pathent::{PathEntity, WalkEntry};
///
/// let entry = WalkEntry::new("root".to_string(), vec![PathEntity::new("root/a.txt")]);
/// assert_eq!(entry.path(), "root");
/// assert_eq!(entry.files().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkEntry {
    path: String,
    files: Vec<PathEntity>,
}

impl WalkEntry {
    /// Create a walk entry.
    #[must_use]
    pub fn new(path: String, files: Vec<PathEntity>) -> Self {
        Self { path, files }
    }

    /// The directory path string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Regular files directly inside the directory.
    #[must_use]
    pub fn files(&self) -> &[PathEntity] {
        &self.files
    }

    /// Split into `(path, files)`.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<PathEntity>) {
        (self.path, self.files)
    }
}

/// How a directory entry is treated during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
    /// Devices, sockets, broken links, or unfollowed symlinks.
    Other,
}
