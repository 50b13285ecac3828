//! Command to describe a single path.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, resolve_entity, GlobalOptions};
use clap::Args;
use pathent::output::PathInfo;
use std::path::PathBuf;

/// Describe a path: name, suffix, suffixes, stem, and what it is.
#[derive(Args)]
pub struct InfoCommand {
    /// Path to describe
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let entity = resolve_entity(Some(&self.path), &config)?;

        let info = PathInfo::describe(&entity)?;
        emit(&formatter(&config).format_info(&info)?);
        Ok(())
    }
}
