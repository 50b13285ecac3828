//! The [`PathEntity`] value type.

use std::convert::Infallible;
use std::fmt;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::decompose;
use super::identity::{self, FileIdentity, StatSource};
use super::normalize::{normalize_case, CaseSensitivity};
use super::pattern::{Glob, Pattern, RGlob};
use super::scan::ScanChildren;
use super::types::WalkOptions;
use super::walk::{LimitedWalk, Walk};
use crate::error::{Error, Result};

/// A normalized filesystem path with decomposition, query, and traversal
/// operations.
///
/// Construction never touches the filesystem. The stored string is
/// normalized according to the entity's [`CaseSensitivity`], and every child
/// produced by a traversal inherits that setting.
///
/// # Examples
///
/// ```
/// use pathent::{CaseSensitivity, PathEntity};
///
/// let archive = PathEntity::with_case("backups/Archive.TAR.gz", CaseSensitivity::Sensitive);
/// assert_eq!(archive.suffix(), ".gz");
/// assert_eq!(archive.suffixes(), vec![".TAR", ".gz"]);
/// assert_eq!(archive.stem(), "Archive.TAR");
///
/// let folded = PathEntity::with_case("Archive.TAR.gz", CaseSensitivity::Insensitive);
/// assert_eq!(folded.name(), "archive.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathEntity {
    path: String,
    case: CaseSensitivity,
}

impl PathEntity {
    /// Create an entity using the host's case convention.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::with_case(raw, CaseSensitivity::host())
    }

    /// Create an entity with an explicit case sensitivity.
    #[must_use]
    pub fn with_case(raw: impl AsRef<str>, case: CaseSensitivity) -> Self {
        Self {
            path: normalize_case(raw.as_ref(), case),
            case,
        }
    }

    /// Create an entity from a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns `NotEncodable` if `path` is not valid UTF-8.
    pub fn from_path(path: &Path, case: CaseSensitivity) -> Result<Self> {
        let raw = path.to_str().ok_or_else(|| Error::NotEncodable {
            path: path.to_path_buf(),
        })?;
        Ok(Self::with_case(raw, case))
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    pub fn cwd() -> Result<Self> {
        Self::cwd_with_case(CaseSensitivity::host())
    }

    /// The current working directory, normalized with `case`.
    ///
    /// # Errors
    ///
    /// See [`PathEntity::cwd`].
    pub fn cwd_with_case(case: CaseSensitivity) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::from_path(&cwd, case)
    }

    /// The current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the home directory cannot be determined, or
    /// `NotEncodable` if it is not valid UTF-8.
    pub fn home() -> Result<Self> {
        Self::home_with_case(CaseSensitivity::host())
    }

    /// The current user's home directory, normalized with `case`.
    ///
    /// # Errors
    ///
    /// See [`PathEntity::home`].
    pub fn home_with_case(case: CaseSensitivity) -> Result<Self> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            path: PathBuf::from("~"),
        })?;
        Self::from_path(&home, case)
    }

    /// The normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The normalized path as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The byte representation of the path.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.path.as_bytes()
    }

    /// The case sensitivity this entity was built with.
    #[must_use]
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Consume the entity, returning the path string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// The final path component.
    #[must_use]
    pub fn name(&self) -> &str {
        decompose::name(&self.path)
    }

    /// The final component's last suffix, such as `".gz"`, or `""`.
    #[must_use]
    pub fn suffix(&self) -> &str {
        decompose::suffix(self.name())
    }

    /// Every suffix of the final component, such as `[".tar", ".gz"]`.
    #[must_use]
    pub fn suffixes(&self) -> Vec<String> {
        decompose::suffixes(self.name())
    }

    /// The final component without its last suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        decompose::stem(self.name())
    }

    /// Append `parts` to this path in place and return the new path string.
    ///
    /// An absolute part replaces everything before it. The result is
    /// normalized again.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathent::{CaseSensitivity, PathEntity};
    /// use std::path::MAIN_SEPARATOR as SEP;
    ///
    /// let mut entity = PathEntity::with_case("base", CaseSensitivity::Sensitive);
    /// let joined = entity.join(["sub", "file.txt"]).to_string();
    /// assert_eq!(joined, format!("base{SEP}sub{SEP}file.txt"));
    /// assert_eq!(entity.name(), "file.txt");
    /// ```
    pub fn join<I, S>(&mut self, parts: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = PathBuf::from(&self.path);
        for part in parts {
            joined.push(part.as_ref());
        }
        let joined = joined
            .into_os_string()
            .into_string()
            .unwrap_or_else(|os| os.to_string_lossy().into_owned());
        self.path = normalize_case(&joined, self.case);
        &self.path
    }

    /// A new entity for `name` inside this one, leaving `self` untouched.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut child = self.clone();
        child.join([name]);
        child
    }

    /// Stat the path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the classified stat error.
    pub fn stat(&self) -> Result<Metadata> {
        identity::stat(self.as_path())
    }

    /// Whether the path exists and is a directory. Any failure reads as false.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.stat().is_ok_and(|meta| meta.is_dir())
    }

    /// Whether the path exists and is a regular file. Any failure reads as
    /// false.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.stat().is_ok_and(|meta| meta.is_file())
    }

    /// Whether the path exists.
    ///
    /// A missing path, a non-directory ancestor, or a path the host cannot
    /// encode all read as `Ok(false)`. Anything else, a permission failure
    /// in particular, is an error: it means existence could not be decided.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` or `Io` when the stat call fails for a
    /// reason other than absence.
    pub fn exists(&self) -> Result<bool> {
        match self.stat() {
            Ok(_) => Ok(true),
            Err(Error::NotFound { .. } | Error::NotEncodable { .. } | Error::NotADirectory { .. }) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether `other` refers to the same file as this path.
    ///
    /// # Errors
    ///
    /// Propagates stat failures on either side, and `InvalidArgument` when
    /// `other` cannot expose a stat identity.
    pub fn same_file<S: StatSource + ?Sized>(&self, other: &S) -> Result<bool> {
        Ok(self.stat_identity()? == other.stat_identity()?)
    }

    /// The direct children of this directory.
    ///
    /// # Errors
    ///
    /// Fails with `NotADirectory` before yielding anything if this path is
    /// not a directory.
    pub fn scan(&self) -> Result<ScanChildren> {
        ScanChildren::open(self)
    }

    /// Post-order walk of the tree rooted here, following symlinks.
    ///
    /// # Errors
    ///
    /// Fails with `NotADirectory` before yielding anything if this path is
    /// not a directory.
    pub fn walk(&self) -> Result<Walk> {
        self.walk_with(WalkOptions::default())
    }

    /// Post-order walk with explicit options.
    ///
    /// # Errors
    ///
    /// See [`PathEntity::walk`].
    pub fn walk_with(&self, options: WalkOptions) -> Result<Walk> {
        Walk::open(self, options)
    }

    /// A walk restricted by depth below this directory.
    ///
    /// With `only_at_limit`, only directories exactly `limit` levels down are
    /// yielded; otherwise every directory at most `limit` levels down.
    ///
    /// # Errors
    ///
    /// See [`PathEntity::walk`].
    pub fn limited_walk(&self, limit: usize, only_at_limit: bool) -> Result<LimitedWalk> {
        self.limited_walk_with(limit, only_at_limit, WalkOptions::default())
    }

    /// A depth-restricted walk with explicit options.
    ///
    /// # Errors
    ///
    /// See [`PathEntity::walk`].
    pub fn limited_walk_with(
        &self,
        limit: usize,
        only_at_limit: bool,
        options: WalkOptions,
    ) -> Result<LimitedWalk> {
        LimitedWalk::open(self, limit, only_at_limit, options)
    }

    /// Regular files directly inside this directory whose names end with
    /// `pattern`, compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` for an empty pattern and with
    /// `NotADirectory` if this path is not a directory.
    pub fn glob(&self, pattern: &str) -> Result<Glob> {
        self.glob_with(Pattern::suffix(pattern)?, WalkOptions::default())
    }

    /// Non-recursive matching with an explicit pattern and options.
    ///
    /// # Errors
    ///
    /// Fails with `NotADirectory` if this path is not a directory.
    pub fn glob_with(&self, pattern: Pattern, options: WalkOptions) -> Result<Glob> {
        Glob::open(self, pattern, options)
    }

    /// Like [`PathEntity::glob`], at every depth below this directory.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` for an empty pattern and with
    /// `NotADirectory` if this path is not a directory.
    pub fn rglob(&self, pattern: &str) -> Result<RGlob> {
        self.rglob_with(Pattern::suffix(pattern)?, WalkOptions::default())
    }

    /// Recursive matching with an explicit pattern and options.
    ///
    /// # Errors
    ///
    /// Fails with `NotADirectory` if this path is not a directory.
    pub fn rglob_with(&self, pattern: Pattern, options: WalkOptions) -> Result<RGlob> {
        RGlob::open(self, pattern, options)
    }
}

impl StatSource for PathEntity {
    fn stat_identity(&self) -> Result<FileIdentity> {
        FileIdentity::of(self.as_path())
    }
}

impl fmt::Display for PathEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for PathEntity {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for PathEntity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PathEntity {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<Path> for PathEntity {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for PathEntity {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl Serialize for PathEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}
