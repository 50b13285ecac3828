//! Stat-based file identity.
//!
//! Two paths name the same file when their identities match. On Unix an
//! identity is the device and inode pair from `stat`; elsewhere it falls back
//! to the canonical path.

use std::fs::{self, File, Metadata};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Issue a single `stat` call (following symlinks) and classify any failure.
///
/// # Errors
///
/// Returns `NotFound`, `PermissionDenied`, `NotEncodable`, `NotADirectory`
/// (a non-directory ancestor), or `Io` for anything else.
pub fn stat(path: &Path) -> Result<Metadata> {
    fs::metadata(path).map_err(|e| Error::from_io(path, e))
}

/// The identity of a file on the host filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    #[cfg(unix)]
    dev: u64,
    #[cfg(unix)]
    ino: u64,
    #[cfg(not(unix))]
    canonical: PathBuf,
}

impl FileIdentity {
    /// Stat `path` and return its identity.
    ///
    /// # Errors
    ///
    /// Returns the classified `stat` error when `path` cannot be inspected.
    pub fn of(path: &Path) -> Result<Self> {
        let meta = stat(path)?;
        Self::from_metadata(path, &meta)
    }

    /// Build an identity from metadata already obtained for `path`.
    ///
    /// # Errors
    ///
    /// On hosts without inode numbers, returns an error if `path` cannot be
    /// canonicalized.
    #[cfg(unix)]
    #[allow(clippy::unnecessary_wraps)]
    pub fn from_metadata(_path: &Path, meta: &Metadata) -> Result<Self> {
        use std::os::unix::fs::MetadataExt;
        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    /// Build an identity from metadata already obtained for `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be canonicalized.
    #[cfg(not(unix))]
    pub fn from_metadata(path: &Path, _meta: &Metadata) -> Result<Self> {
        fs::canonicalize(path)
            .map(|canonical| Self { canonical })
            .map_err(|e| Error::from_io(path, e))
    }
}

/// Anything that can report the stat identity of the file it refers to.
///
/// `PathEntity::same_file` accepts any implementor, so a path entity can be
/// compared against raw paths, strings, or open files.
pub trait StatSource {
    /// Stat the underlying file and return its identity.
    ///
    /// # Errors
    ///
    /// Returns the stat failure, or `InvalidArgument` if this source cannot
    /// expose an identity on the current host.
    fn stat_identity(&self) -> Result<FileIdentity>;
}

impl StatSource for Path {
    fn stat_identity(&self) -> Result<FileIdentity> {
        FileIdentity::of(self)
    }
}

impl StatSource for PathBuf {
    fn stat_identity(&self) -> Result<FileIdentity> {
        self.as_path().stat_identity()
    }
}

impl StatSource for str {
    fn stat_identity(&self) -> Result<FileIdentity> {
        Path::new(self).stat_identity()
    }
}

impl StatSource for String {
    fn stat_identity(&self) -> Result<FileIdentity> {
        Path::new(self.as_str()).stat_identity()
    }
}

impl StatSource for File {
    #[cfg(unix)]
    fn stat_identity(&self) -> Result<FileIdentity> {
        let meta = self.metadata()?;
        FileIdentity::from_metadata(Path::new(""), &meta)
    }

    #[cfg(not(unix))]
    fn stat_identity(&self) -> Result<FileIdentity> {
        Err(Error::invalid_argument(
            "other",
            "open file handles do not expose a stat identity on this platform",
        ))
    }
}

impl<T: StatSource + ?Sized> StatSource for &T {
    fn stat_identity(&self) -> Result<FileIdentity> {
        (**self).stat_identity()
    }
}
