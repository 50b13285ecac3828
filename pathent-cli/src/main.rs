//! Main entry point for the pathent CLI.
//!
//! This is the command-line interface to the pathent library. It provides
//! commands for inspecting paths and the trees below them:
//! - `info`: Describe a path
//! - `ls`: List direct children
//! - `walk`: Walk a tree bottom-up
//! - `glob`: Find matching files
//! - `same-file`: Compare two paths by identity

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; library diagnostics go through `log`.
    if let Err(e) = pathent::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        case_sensitive: cli.case_flag(),
        no_follow_symlinks: cli.no_follow_symlinks,
        format: cli.format,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Info(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Walk(cmd) => cmd.execute(&global),
        cli::Command::Glob(cmd) => cmd.execute(&global),
        cli::Command::SameFile(cmd) => cmd.execute(&global),
        cli::Command::Cwd(cmd) => cmd.execute(&global),
        cli::Command::Home(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // Semantic failures already reported their answer on stdout.
            if !matches!(e, error::CliError::SemanticFailure(_)) || global.verbose {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
