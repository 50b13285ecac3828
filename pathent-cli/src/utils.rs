//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: path resolution,
//! configuration loading, and output.

use crate::error::CliError;
use pathent::output::OutputFormatter;
use pathent::{Config, ConfigBuilder, OutputFormat, PathEntity};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit case sensitivity from `--case-sensitive`/`--case-insensitive`.
    pub case_sensitive: Option<bool>,

    /// Skip symlinks during traversal.
    pub no_follow_symlinks: bool,

    /// Explicit output format.
    pub format: Option<OutputFormat>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// The subset of configuration set by command-line flags.
    pub fn overrides(&self) -> Config {
        Config {
            case_sensitive: self.case_sensitive,
            follow_symlinks: self.no_follow_symlinks.then_some(false),
            pattern_mode: None,
            output_format: self.format,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .with_config(global.overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Make `path` absolute against the current directory without touching the
/// filesystem beyond that.
pub fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Resolve an optional path argument to an entity, using CWD if not given.
pub fn resolve_entity(path: Option<&Path>, config: &Config) -> Result<PathEntity, CliError> {
    let case = config.case_sensitivity();
    match path {
        Some(p) => Ok(PathEntity::from_path(&absolutize(p)?, case)?),
        None => Ok(PathEntity::cwd_with_case(case)?),
    }
}

/// The formatter selected by the resolved configuration.
pub fn formatter(config: &Config) -> Box<dyn OutputFormatter> {
    config.output_format().create_formatter()
}

/// Print formatted output, skipping empty results.
pub fn emit(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
