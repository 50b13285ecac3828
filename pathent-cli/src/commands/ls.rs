//! Command to list the direct children of a directory.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, resolve_entity, GlobalOptions};
use clap::Args;
use pathent::PathEntity;
use std::path::PathBuf;

/// List the direct children of a directory, in listing order.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl LsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = resolve_entity(self.dir.as_deref(), &config)?;

        let children = dir.scan()?.collect::<pathent::Result<Vec<PathEntity>>>()?;
        log::debug!("{} children in {dir}", children.len());

        emit(&formatter(&config).format_entities(&children)?);
        Ok(())
    }
}
