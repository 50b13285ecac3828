//! File name matching for `glob` and `rglob`.
//!
//! The default matching rule is a literal, case-insensitive suffix match:
//! a name matches when it ends with the pattern and has at least one
//! character before it. `"txt"` matches `a.TXT` and `notes_txt`, but not
//! `txt` itself. Regex and glob metacharacters in the pattern are literal.
//!
//! Shell-style globs (`*.rs`, `data_??.csv`) are available as an explicit
//! [`PatternMode::Shell`], compiled with `globset` and matched against the
//! file name, case-insensitively.

use std::fs::ReadDir;
use std::path::PathBuf;

use clap::ValueEnum;
use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};

use super::entity::PathEntity;
use super::normalize::{case_fold, CaseSensitivity};
use super::traverse::{classify, open_dir, DirStack, Event};
use super::types::{EntryKind, WalkOptions};
use crate::error::{Error, Result};

/// How a pattern string is interpreted.
///
/// # Examples
///
/// ```
/// use pathent::PatternMode;
///
/// assert_eq!(PatternMode::default(), PatternMode::Suffix);
/// assert_eq!(PatternMode::Shell.to_string(), "shell");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// Literal, case-insensitive suffix of the file name.
    #[default]
    Suffix,
    /// Shell glob over the file name.
    Shell,
}

impl std::fmt::Display for PatternMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suffix => write!(f, "suffix"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    /// The case-folded literal suffix.
    Suffix(String),
    Shell(GlobMatcher),
}

/// A compiled file name pattern.
///
/// # Examples
///
/// ```
/// use pathent::Pattern;
///
/// let pattern = Pattern::suffix("txt").unwrap();
/// assert!(pattern.is_match("notes.TXT"));
/// assert!(!pattern.is_match("txt"));
///
/// let pattern = Pattern::shell("*.rs").unwrap();
/// assert!(pattern.is_match("main.rs"));
///
/// assert!(Pattern::suffix("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

impl Pattern {
    /// Compile `pattern` according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the pattern is empty or, for shell mode,
    /// is not a valid glob.
    pub fn new(pattern: &str, mode: PatternMode) -> Result<Self> {
        match mode {
            PatternMode::Suffix => Self::suffix(pattern),
            PatternMode::Shell => Self::shell(pattern),
        }
    }

    /// A literal, case-insensitive suffix pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pattern` is empty.
    pub fn suffix(pattern: &str) -> Result<Self> {
        ensure_not_empty(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            matcher: Matcher::Suffix(case_fold(pattern)),
        })
    }

    /// A shell glob pattern, matched case-insensitively against file names.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pattern` is empty or does not compile.
    pub fn shell(pattern: &str) -> Result<Self> {
        ensure_not_empty(pattern)?;
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::invalid_argument("pattern", e.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            matcher: Matcher::Shell(glob.compile_matcher()),
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The mode this pattern was compiled with.
    #[must_use]
    pub fn mode(&self) -> PatternMode {
        match self.matcher {
            Matcher::Suffix(_) => PatternMode::Suffix,
            Matcher::Shell(_) => PatternMode::Shell,
        }
    }

    /// Test a file name against the pattern.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Suffix(folded) => {
                let candidate = case_fold(name);
                candidate.len() > folded.len() && candidate.ends_with(folded.as_str())
            }
            Matcher::Shell(glob) => glob.is_match(name),
        }
    }
}

fn ensure_not_empty(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::invalid_argument("pattern", "must not be empty"));
    }
    Ok(())
}

/// Regular files directly inside a directory whose names match a pattern.
///
/// Created by [`PathEntity::glob`].
#[derive(Debug)]
pub struct Glob {
    entries: Option<ReadDir>,
    dir: PathBuf,
    pattern: Pattern,
    case: CaseSensitivity,
    options: WalkOptions,
}

impl Glob {
    pub(crate) fn open(dir: &PathEntity, pattern: Pattern, options: WalkOptions) -> Result<Self> {
        Ok(Self {
            entries: Some(open_dir(dir)?),
            dir: dir.as_path().to_path_buf(),
            pattern,
            case: dir.case(),
            options,
        })
    }

    fn listing_error(&self, err: std::io::Error) -> Error {
        Error::from_io(&self.dir, err)
    }

    fn finish(&mut self, err: Error) -> Option<Result<PathEntity>> {
        self.entries = None;
        Some(Err(err))
    }
}

impl Iterator for Glob {
    type Item = Result<PathEntity>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.as_mut()?.next() {
                None => {
                    self.entries = None;
                    return None;
                }
                Some(Err(e)) => {
                    let err = self.listing_error(e);
                    return self.finish(err);
                }
                Some(Ok(entry)) => entry,
            };

            match classify(&entry, self.options) {
                Ok(EntryKind::File) => {}
                Ok(_) => continue,
                Err(e) => return self.finish(e),
            }

            match PathEntity::from_path(&entry.path(), self.case) {
                Ok(file) if self.pattern.is_match(file.name()) => return Some(Ok(file)),
                Ok(_) => {}
                Err(e) => return self.finish(e),
            }
        }
    }
}

/// Matching regular files at every depth below a directory.
///
/// Created by [`PathEntity::rglob`]. Entries are processed in listing order
/// and a subdirectory is descended into as soon as it is met.
#[derive(Debug)]
pub struct RGlob {
    stack: DirStack,
    pattern: Pattern,
}

impl RGlob {
    pub(crate) fn open(dir: &PathEntity, pattern: Pattern, options: WalkOptions) -> Result<Self> {
        Ok(Self {
            stack: DirStack::open(dir, options)?,
            pattern,
        })
    }

    /// Number of directory handles currently held open.
    #[must_use]
    pub fn open_handles(&self) -> usize {
        self.stack.open_handles()
    }
}

impl Iterator for RGlob {
    type Item = Result<PathEntity>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.next_event()? {
                Ok(Event::File(file)) if self.pattern.is_match(file.name()) => {
                    return Some(Ok(file));
                }
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_is_case_insensitive() {
        let pattern = Pattern::suffix("TxT").unwrap();
        assert!(pattern.is_match("a.txt"));
        assert!(pattern.is_match("B.TXT"));
        assert!(!pattern.is_match("b.md"));
    }

    #[test]
    fn test_suffix_needs_a_leading_character() {
        let pattern = Pattern::suffix("txt").unwrap();
        assert!(!pattern.is_match("txt"));
        assert!(pattern.is_match("xtxt"));
    }

    #[test]
    fn test_suffix_is_literal() {
        let pattern = Pattern::suffix(".*").unwrap();
        assert!(pattern.is_match("weird.*"));
        assert!(!pattern.is_match("a.txt"));

        let pattern = Pattern::suffix("[0-9]").unwrap();
        assert!(pattern.is_match("file[0-9]"));
        assert!(!pattern.is_match("file1"));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(Pattern::suffix("").unwrap_err().is_invalid_argument());
        assert!(Pattern::shell("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_shell_pattern() {
        let pattern = Pattern::shell("*.rs").unwrap();
        assert!(pattern.is_match("lib.rs"));
        assert!(pattern.is_match("LIB.RS"));
        assert!(!pattern.is_match("lib.rsx"));
        assert_eq!(pattern.mode(), PatternMode::Shell);
    }

    #[test]
    fn test_invalid_shell_pattern() {
        let err = Pattern::shell("a[").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_glob_listing_error_names_directory_and_fuses() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "").unwrap();
        let dir = PathEntity::from_path(temp.path(), CaseSensitivity::Sensitive).unwrap();
        let mut glob = Glob::open(&dir, Pattern::suffix("txt").unwrap(), WalkOptions::default())
            .unwrap();
        assert_eq!(glob.dir, temp.path());

        let denied = glob.listing_error(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        ));
        let err = glob.finish(denied);
        assert!(matches!(
            err,
            Some(Err(Error::PermissionDenied { ref path })) if path == temp.path()
        ));
        assert!(glob.next().is_none());
    }

    #[test]
    fn test_new_dispatches_on_mode() {
        assert_eq!(
            Pattern::new("rs", PatternMode::Suffix).unwrap().mode(),
            PatternMode::Suffix
        );
        assert_eq!(
            Pattern::new("*.rs", PatternMode::Shell).unwrap().as_str(),
            "*.rs"
        );
    }
}
