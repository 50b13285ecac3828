//! Command to print the home directory.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathent::PathEntity;

/// Print the current user's home directory.
#[derive(Args)]
pub struct HomeCommand {}

impl HomeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let home = PathEntity::home_with_case(config.case_sensitivity())?;
        println!("{home}");
        Ok(())
    }
}
