//! Path case normalization.
//!
//! A [`PathEntity`](super::PathEntity) stores its path in normalized form.
//! Normalization is controlled by an explicit [`CaseSensitivity`] rather
//! than by whatever the host happens to do, so results are the same on every
//! platform once the flag is fixed:
//!
//! - `Sensitive` keeps the string as given.
//! - `Insensitive` lowercases it and, on hosts whose separator is `\`,
//!   turns `/` into `\`.

use std::path::MAIN_SEPARATOR;

/// The host path separator.
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// Whether path strings are compared and stored case-sensitively.
///
/// # Examples
///
/// ```
/// use pathent::CaseSensitivity;
///
/// assert_eq!(CaseSensitivity::from_flag(true), CaseSensitivity::Sensitive);
/// assert!(!CaseSensitivity::Insensitive.is_sensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseSensitivity {
    /// Paths are stored verbatim.
    Sensitive,
    /// Paths are case-folded on construction.
    ///
    /// Traversal still lists a case-sensitive tree correctly, but the
    /// entities it yields are folded too. On a case-sensitive filesystem a
    /// child named `Sub/B.TXT` comes back as `sub/b.txt`, which does not
    /// resolve: `is_file()` is `false` and `exists()` is `Ok(false)`.
    Insensitive,
}

impl CaseSensitivity {
    /// The convention of the host: insensitive on Windows, sensitive elsewhere.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Build from a `case_sensitive` flag.
    #[must_use]
    pub const fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }

    /// Returns true for [`CaseSensitivity::Sensitive`].
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

impl Default for CaseSensitivity {
    fn default() -> Self {
        Self::host()
    }
}

/// Fold a string for case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use pathent::path::normalize::case_fold;
///
/// assert_eq!(case_fold("Archive.TAR.gz"), "archive.tar.gz");
/// ```
#[must_use]
pub fn case_fold(s: &str) -> String {
    s.to_lowercase()
}

/// Normalize a raw path string according to `case`.
///
/// Normalization never touches the filesystem and is idempotent.
///
/// # Examples
///
/// ```
/// use pathent::path::normalize::normalize_case;
/// use pathent::CaseSensitivity;
///
/// assert_eq!(normalize_case("Docs/README", CaseSensitivity::Sensitive), "Docs/README");
///
/// let folded = normalize_case("Docs", CaseSensitivity::Insensitive);
/// assert_eq!(folded, "docs");
/// ```
#[must_use]
pub fn normalize_case(raw: &str, case: CaseSensitivity) -> String {
    match case {
        CaseSensitivity::Sensitive => raw.to_string(),
        CaseSensitivity::Insensitive => {
            let folded = case_fold(raw);
            if SEPARATOR == '\\' {
                folded.replace('/', "\\")
            } else {
                folded
            }
        }
    }
}
