//! Post-order directory walks.
//!
//! A walk yields one [`WalkEntry`] per directory. Every subdirectory's
//! entries are produced before its parent's, and each entry lists only the
//! regular files directly inside that directory.
//!
//! Depth is measured on path strings: the number of separators in a
//! directory's path beyond the walk root's own path. The root is depth 0.

use super::entity::PathEntity;
use super::normalize::SEPARATOR;
use super::traverse::{DirStack, Event};
use super::types::{WalkEntry, WalkOptions};
use crate::error::Result;

/// Depth of `dir` below `root`, counted in separators.
///
/// A root spelled with a trailing separator counts the same as one without.
///
/// # Examples
///
/// ```
/// use pathent::path::walk::relative_depth;
///
/// let sep = std::path::MAIN_SEPARATOR;
/// let root = format!("{sep}data");
/// assert_eq!(relative_depth(&root, &root), 0);
/// assert_eq!(relative_depth(&root, &format!("{root}{sep}a{sep}b")), 2);
/// ```
#[must_use]
pub fn relative_depth(root: &str, dir: &str) -> usize {
    let Some(rest) = dir.strip_prefix(root) else {
        return dir.matches(SEPARATOR).count();
    };
    let depth = rest.matches(SEPARATOR).count();
    if !rest.is_empty() && root.ends_with(SEPARATOR) {
        depth + 1
    } else {
        depth
    }
}

/// Lazy post-order walk, created by [`PathEntity::walk`].
///
/// After an error is yielded the walk is over and every open directory
/// handle has been closed.
#[derive(Debug)]
pub struct Walk {
    stack: DirStack,
    /// Files collected so far for each directory on the stack.
    pending: Vec<Vec<PathEntity>>,
}

impl Walk {
    pub(crate) fn open(root: &PathEntity, options: WalkOptions) -> Result<Self> {
        Ok(Self {
            stack: DirStack::open(root, options)?,
            pending: vec![Vec::new()],
        })
    }

    /// Number of directory handles the walk currently holds open.
    #[must_use]
    pub fn open_handles(&self) -> usize {
        self.stack.open_handles()
    }

    /// Stop the walk early and release its directory handles.
    pub fn close(&mut self) {
        self.stack.close();
        self.pending.clear();
    }
}

impl Iterator for Walk {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.next_event()? {
                Ok(Event::Enter) => self.pending.push(Vec::new()),
                Ok(Event::File(file)) => {
                    if let Some(files) = self.pending.last_mut() {
                        files.push(file);
                    }
                }
                Ok(Event::Leave(dir)) => {
                    let files = self.pending.pop().unwrap_or_default();
                    return Some(Ok(WalkEntry::new(dir.into_string(), files)));
                }
                Err(e) => {
                    self.pending.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

/// A walk filtered by depth, created by [`PathEntity::limited_walk`].
#[derive(Debug)]
pub struct LimitedWalk {
    walk: Walk,
    root: String,
    limit: usize,
    only_at_limit: bool,
}

impl LimitedWalk {
    pub(crate) fn open(
        root: &PathEntity,
        limit: usize,
        only_at_limit: bool,
        options: WalkOptions,
    ) -> Result<Self> {
        Ok(Self {
            walk: Walk::open(root, options)?,
            root: root.as_str().to_string(),
            limit,
            only_at_limit,
        })
    }

    fn keeps(&self, depth: usize) -> bool {
        if self.only_at_limit {
            depth == self.limit
        } else {
            depth <= self.limit
        }
    }
}

impl Iterator for LimitedWalk {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walk.next()? {
                Ok(entry) => {
                    if self.keeps(relative_depth(&self.root, entry.path())) {
                        return Some(Ok(entry));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CaseSensitivity;
    use std::fs;
    use tempfile::TempDir;

    fn p(parts: &[&str]) -> String {
        parts.join(&SEPARATOR.to_string())
    }

    #[test]
    fn test_depth_of_root_is_zero() {
        let root = p(&["", "tmp", "root"]);
        assert_eq!(relative_depth(&root, &root), 0);
    }

    #[test]
    fn test_depth_counts_separators() {
        let root = p(&["", "tmp", "root"]);
        assert_eq!(relative_depth(&root, &p(&["", "tmp", "root", "a"])), 1);
        assert_eq!(relative_depth(&root, &p(&["", "tmp", "root", "a", "b"])), 2);
    }

    #[test]
    fn test_depth_with_trailing_separator_root() {
        let root = p(&["", "tmp", "root", ""]);
        assert_eq!(relative_depth(&root, &p(&["", "tmp", "root", "a"])), 1);
        assert_eq!(relative_depth(&root, &root), 0);
    }

    #[test]
    fn test_depth_of_unrelated_path_counts_all_separators() {
        let root = p(&["", "tmp", "root"]);
        assert_eq!(relative_depth(&root, &p(&["", "other", "x"])), 2);
    }

    #[test]
    fn test_walk_of_a_file_fails_before_iterating() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "").unwrap();
        let entity = PathEntity::from_path(&file, CaseSensitivity::Sensitive).unwrap();

        assert!(entity.walk().unwrap_err().is_not_a_directory());
        assert!(entity.limited_walk(1, false).unwrap_err().is_not_a_directory());
        assert!(entity.rglob("txt").unwrap_err().is_not_a_directory());
    }

    #[test]
    fn test_open_walks_are_debuggable() {
        let temp = TempDir::new().unwrap();
        let root = PathEntity::from_path(temp.path(), CaseSensitivity::Sensitive).unwrap();

        let walk = root.walk().unwrap();
        assert!(format!("{walk:?}").starts_with("Walk"));
        let limited = root.limited_walk(0, true).unwrap();
        assert!(format!("{limited:?}").starts_with("LimitedWalk"));
        let rglob = root.rglob("txt").unwrap();
        assert!(format!("{rglob:?}").starts_with("RGlob"));
    }
}
