//! Command to walk a directory tree.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, resolve_entity, GlobalOptions};
use clap::Args;
use pathent::WalkEntry;
use std::path::PathBuf;

/// Walk a directory tree bottom-up, one record per directory.
#[derive(Args)]
pub struct WalkCommand {
    /// Directory to walk (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Only report directories at most this deep (the root is depth 0)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Report only directories exactly at --max-depth
    #[arg(long, requires = "max_depth")]
    pub only_at_depth: bool,
}

impl WalkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolve_entity(self.dir.as_deref(), &config)?;
        let options = config.walk_options();

        let entries = match self.max_depth {
            Some(limit) => root
                .limited_walk_with(limit, self.only_at_depth, options)?
                .collect::<pathent::Result<Vec<WalkEntry>>>()?,
            None => root
                .walk_with(options)?
                .collect::<pathent::Result<Vec<WalkEntry>>>()?,
        };

        emit(&formatter(&config).format_walk(&entries)?);
        Ok(())
    }
}
