//! Command to print the current working directory.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathent::PathEntity;

/// Print the current working directory.
#[derive(Args)]
pub struct CwdCommand {}

impl CwdCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = PathEntity::cwd_with_case(config.case_sensitivity())?;
        println!("{cwd}");
        Ok(())
    }
}
