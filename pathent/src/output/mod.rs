//! Output formatting for path listings.
//!
//! Formatters turn entity lists, walk results, and single-path descriptions
//! into text for display.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::path::{PathEntity, WalkEntry};
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for rendering path results in one output format.
pub trait OutputFormatter {
    /// Format a flat list of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_entities(&self, entities: &[PathEntity]) -> Result<String>;

    /// Format the result of a walk, one record per directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_walk(&self, entries: &[WalkEntry]) -> Result<String>;

    /// Format the description of a single path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_info(&self, info: &PathInfo) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// Everything the library can say about one path.
///
/// # Examples
///
/// ```
/// use pathent::output::PathInfo;
/// use pathent::{CaseSensitivity, PathEntity};
///
/// let entity = PathEntity::with_case("/no/such/archive.tar.gz", CaseSensitivity::Sensitive);
/// let info = PathInfo::describe(&entity).unwrap();
/// assert_eq!(info.stem, "archive.tar");
/// assert_eq!(info.suffixes, vec![".tar", ".gz"]);
/// assert!(!info.exists);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    /// The normalized path.
    pub path: String,
    /// The final component.
    pub name: String,
    /// The last extension, with its dot.
    pub suffix: String,
    /// Every extension, in order.
    pub suffixes: Vec<String>,
    /// The name without its last extension.
    pub stem: String,
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
    /// Whether the path is a regular file.
    pub is_file: bool,
}

impl PathInfo {
    /// Collect decomposition and existence facts for `entity`.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`PathEntity::exists`] that leave existence
    /// undecided.
    pub fn describe(entity: &PathEntity) -> Result<Self> {
        Ok(Self {
            path: entity.as_str().to_string(),
            name: entity.name().to_string(),
            suffix: entity.suffix().to_string(),
            suffixes: entity.suffixes(),
            stem: entity.stem().to_string(),
            exists: entity.exists()?,
            is_dir: entity.is_dir(),
            is_file: entity.is_file(),
        })
    }
}
