//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory trees used across
//! the pathent integration suites.

use std::fs;
use std::path::{Path, PathBuf};

use pathent::{CaseSensitivity, PathEntity};
use tempfile::TempDir;

/// Builder for temporary directory trees.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .file("a.txt")
///     .file("sub/b.txt")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dirs: Vec<PathBuf>,
    files: Vec<(PathBuf, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree builder.
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds an empty directory, creating parents as needed.
    pub fn dir(mut self, relative: &str) -> Self {
        self.dirs.push(PathBuf::from(relative));
        self
    }

    /// Adds a file whose contents are its own relative path.
    pub fn file(mut self, relative: &str) -> Self {
        self.files
            .push((PathBuf::from(relative), relative.to_string()));
        self
    }

    /// Materializes the tree in a fresh temporary directory.
    pub fn build(self) -> Tree {
        let temp = TempDir::new().unwrap();
        for dir in &self.dirs {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        for (file, contents) in &self.files {
            let path = temp.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
        Tree { temp }
    }
}

/// A materialized tree. Removed when dropped.
#[allow(dead_code)]
pub struct Tree {
    temp: TempDir,
}

#[allow(dead_code)]
impl Tree {
    /// The root directory on disk.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// The root as a case-sensitive entity.
    pub fn root(&self) -> PathEntity {
        PathEntity::from_path(self.temp.path(), CaseSensitivity::Sensitive).unwrap()
    }

    /// An entity for `relative` below the root.
    pub fn entity(&self, relative: &str) -> PathEntity {
        let mut entity = self.root();
        entity.join(relative.split('/'));
        entity
    }
}

/// The tree `root/{a.txt, sub/{b.txt}}`.
#[allow(dead_code)]
pub fn small_tree() -> Tree {
    TreeFixture::new().file("a.txt").file("sub/b.txt").build()
}

/// Returns true when the filesystem enforces permission bits for the
/// current user.
///
/// When it does not (the suite is running as root, for instance), prints a
/// notice naming `test` so the skipped coverage shows up in the output.
#[allow(dead_code)]
#[cfg(unix)]
pub fn permissions_enforced(scratch: &Path, test: &str) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let locked = scratch.join("permission-check");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let enforced = fs::read_dir(&locked).is_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    fs::remove_dir(&locked).unwrap();

    if !enforced {
        eprintln!("skipping {test}: permission bits are not enforced for this user");
    }
    enforced
}
