//! Command to find files matching a pattern.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, resolve_entity, GlobalOptions};
use clap::Args;
use pathent::{PathEntity, Pattern, PatternMode};
use std::path::PathBuf;

/// Find regular files whose names match a pattern.
///
/// By default the pattern is a literal, case-insensitive name suffix.
#[derive(Args)]
pub struct GlobCommand {
    /// Pattern to match against file names
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory to search (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Search every level below the directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Treat the pattern as a shell glob such as `*.rs`
    #[arg(long)]
    pub shell: bool,
}

impl GlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mode = if self.shell {
            PatternMode::Shell
        } else {
            config.pattern_mode()
        };
        let pattern = Pattern::new(&self.pattern, mode)?;
        let dir = resolve_entity(self.dir.as_deref(), &config)?;
        let options = config.walk_options();

        let matches = if self.recursive {
            dir.rglob_with(pattern, options)?
                .collect::<pathent::Result<Vec<PathEntity>>>()?
        } else {
            dir.glob_with(pattern, options)?
                .collect::<pathent::Result<Vec<PathEntity>>>()?
        };

        emit(&formatter(&config).format_entities(&matches)?);
        Ok(())
    }
}
