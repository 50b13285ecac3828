//! Error types for the pathent library.
//!
//! This module provides the error hierarchy for every path operation,
//! using `thiserror` for ergonomic error handling.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a pathent error.
///
/// # Examples
///
/// ```
/// use pathent::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathent library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The path cannot be handed to the host (invalid UTF-8, embedded NUL).
    #[error("path is not encodable: {}", path.display())]
    NotEncodable {
        /// The offending path.
        path: PathBuf,
    },

    /// A directory operation was invoked on something that is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// An argument was rejected before touching the filesystem.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The argument name.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify an I/O error raised while operating on `path`.
    ///
    /// `NotFound` and `PermissionDenied` map to their own variants, invalid
    /// input (an embedded NUL byte, for instance) maps to `NotEncodable`, and
    /// everything else is kept as `Io`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathent::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = io::Error::new(io::ErrorKind::NotFound, "gone");
    /// assert!(Error::from_io(Path::new("/gone"), err).is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidInput => Self::NotEncodable {
                path: path.to_path_buf(),
            },
            ErrorKind::NotADirectory => Self::NotADirectory {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Shorthand for an `InvalidArgument` error.
    pub(crate) fn invalid_argument(argument: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathent::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathent::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error was raised because a path is not a directory.
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Check if error is an argument rejection.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
