//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathent. Every field
//! is optional so that partial files and environment overrides can be merged;
//! the accessor methods resolve the effective value with its default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::path::{CaseSensitivity, PatternMode, WalkOptions};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathent::config::{Config, OutputFormat};
/// use pathent::CaseSensitivity;
///
/// let config = Config {
///     case_sensitive: Some(false),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.case_sensitivity(), CaseSensitivity::Insensitive);
/// assert!(config.walk_options().follow_symlinks);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store and compare paths case-sensitively. Defaults to the host convention.
    pub case_sensitive: Option<bool>,

    /// Follow symlinks during recursive traversal. Defaults to true.
    pub follow_symlinks: Option<bool>,

    /// How `glob` patterns are interpreted. Defaults to suffix matching.
    pub pattern_mode: Option<PatternMode>,

    /// Output format for CLI listings. Defaults to text.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The effective case sensitivity.
    #[must_use]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitive
            .map_or_else(CaseSensitivity::host, CaseSensitivity::from_flag)
    }

    /// The effective traversal options.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::default().with_follow_symlinks(self.follow_symlinks.unwrap_or(true))
    }

    /// The effective pattern mode.
    #[must_use]
    pub fn pattern_mode(&self) -> PatternMode {
        self.pattern_mode.unwrap_or_default()
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for CLI listings.
///
/// # Examples
///
/// ```
/// use pathent::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One record per line.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
