//! Command to compare two paths by file identity.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_entity, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Check whether two paths refer to the same file.
///
/// Prints `true` or `false`; exits with status 1 when they differ.
#[derive(Args)]
pub struct SameFileCommand {
    /// First path
    #[arg(value_name = "A")]
    pub first: PathBuf,

    /// Second path
    #[arg(value_name = "B")]
    pub second: PathBuf,
}

impl SameFileCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let first = resolve_entity(Some(&self.first), &config)?;
        let second = resolve_entity(Some(&self.second), &config)?;

        let same = first.same_file(&second)?;
        println!("{same}");

        if same {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{first} and {second} are different files"
            )))
        }
    }
}
