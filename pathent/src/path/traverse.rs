//! The work-list behind recursive traversal.
//!
//! [`DirStack`] replaces recursion with an explicit stack of open directory
//! frames. Each frame owns its `ReadDir` handle, so popping a frame, failing,
//! or dropping the stack closes every handle still open.
//!
//! The identities of the directories on the current descent path are kept in
//! a set. Meeting one of them again means a symlink loop; that directory is
//! skipped instead of being entered a second time.

use std::collections::HashSet;
use std::fs::{self, DirEntry, ReadDir};
use std::path::{Path, PathBuf};

use super::entity::PathEntity;
use super::identity::FileIdentity;
use super::normalize::CaseSensitivity;
use super::types::{EntryKind, WalkOptions};
use crate::error::{Error, Result};

/// Classify a directory entry according to `options`.
///
/// # Errors
///
/// Returns an error if the entry's type cannot be read.
pub(crate) fn classify(entry: &DirEntry, options: WalkOptions) -> Result<EntryKind> {
    let path = entry.path();
    let file_type = entry.file_type().map_err(|e| Error::from_io(&path, e))?;

    if file_type.is_symlink() {
        if !options.follow_symlinks {
            return Ok(EntryKind::Other);
        }
        // A dangling link has no target to classify.
        return Ok(match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        });
    }

    Ok(if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    })
}

/// Open `dir` for listing, failing with `NotADirectory` if it is not one.
///
/// # Errors
///
/// Returns `NotADirectory` when `dir` is missing or not a directory, and the
/// classified I/O error if listing fails.
pub(crate) fn open_dir(dir: &PathEntity) -> Result<ReadDir> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.as_path().to_path_buf(),
        });
    }
    fs::read_dir(dir.as_path()).map_err(|e| Error::from_io(dir.as_path(), e))
}

/// An event produced while draining a [`DirStack`].
#[derive(Debug)]
pub(crate) enum Event {
    /// A subdirectory was entered; its entries follow.
    Enter,
    /// A regular file in the directory currently on top of the stack.
    File(PathEntity),
    /// The directory on top of the stack is exhausted and was closed.
    Leave(PathEntity),
}

#[derive(Debug)]
struct Frame {
    dir: PathEntity,
    /// The path used for filesystem calls; `dir` may be case-folded.
    real: PathBuf,
    identity: FileIdentity,
    entries: ReadDir,
}

/// Depth-first work-list over a directory tree.
#[derive(Debug)]
pub(crate) struct DirStack {
    frames: Vec<Frame>,
    active: HashSet<FileIdentity>,
    case: CaseSensitivity,
    options: WalkOptions,
}

impl DirStack {
    /// Open `root` and prepare to traverse it.
    ///
    /// # Errors
    ///
    /// Fails with `NotADirectory` before anything is produced when `root` is
    /// not a directory, or with the I/O error from opening it.
    pub(crate) fn open(root: &PathEntity, options: WalkOptions) -> Result<Self> {
        let entries = open_dir(root)?;
        let identity = FileIdentity::of(root.as_path())?;

        let mut active = HashSet::new();
        active.insert(identity.clone());

        Ok(Self {
            frames: vec![Frame {
                dir: root.clone(),
                real: root.as_path().to_path_buf(),
                identity,
                entries,
            }],
            active,
            case: root.case(),
            options,
        })
    }

    /// Number of directory handles currently open.
    pub(crate) fn open_handles(&self) -> usize {
        self.frames.len()
    }

    /// Close every open handle. Later calls to `next_event` return `None`.
    pub(crate) fn close(&mut self) {
        self.frames.clear();
        self.active.clear();
    }

    fn fail(&mut self, err: Error) -> Error {
        self.close();
        err
    }

    /// Push `real` as a new frame unless it is already on the descent path.
    fn descend(&mut self, real: PathBuf) -> Result<bool> {
        let identity = FileIdentity::of(&real)?;
        if self.active.contains(&identity) {
            log::warn!("skipping {}: directory loop", real.display());
            return Ok(false);
        }

        let dir = PathEntity::from_path(&real, self.case)?;
        let entries = fs::read_dir(&real).map_err(|e| Error::from_io(&real, e))?;
        log::debug!("entering {dir}");

        self.active.insert(identity.clone());
        self.frames.push(Frame {
            dir,
            real,
            identity,
            entries,
        });
        Ok(true)
    }

    fn top_path(&self) -> &Path {
        self.frames.last().map_or(Path::new(""), |f| f.real.as_path())
    }

    /// Advance the traversal by one observable step.
    pub(crate) fn next_event(&mut self) -> Option<Result<Event>> {
        loop {
            let next = self.frames.last_mut()?.entries.next();

            let entry = match next {
                None => {
                    let frame = self.frames.pop()?;
                    self.active.remove(&frame.identity);
                    return Some(Ok(Event::Leave(frame.dir)));
                }
                Some(Err(e)) => {
                    let err = Error::from_io(self.top_path(), e);
                    return Some(Err(self.fail(err)));
                }
                Some(Ok(entry)) => entry,
            };

            let kind = match classify(&entry, self.options) {
                Ok(kind) => kind,
                Err(e) => return Some(Err(self.fail(e))),
            };

            match kind {
                EntryKind::Other => {}
                EntryKind::File => {
                    return Some(
                        PathEntity::from_path(&entry.path(), self.case)
                            .map(Event::File)
                            .map_err(|e| self.fail(e)),
                    );
                }
                EntryKind::Directory => match self.descend(entry.path()) {
                    Ok(true) => return Some(Ok(Event::Enter)),
                    Ok(false) => {}
                    Err(e) => return Some(Err(self.fail(e))),
                },
            }
        }
    }
}
