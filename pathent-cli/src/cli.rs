//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CwdCommand, GlobCommand, HomeCommand, InfoCommand, LsCommand,
    SameFileCommand, WalkCommand,
};
use clap::{Parser, Subcommand};
use pathent::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for inspecting paths, walking trees, and matching files.
#[derive(Parser)]
#[command(name = "pathent")]
#[command(version, about = "Inspect paths, walk directory trees, and match files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Keep path case as written
    #[arg(long, global = true, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Fold paths to lowercase
    ///
    /// Printed paths are folded as well. On a case-sensitive filesystem a
    /// folded path to a file with uppercase letters in its name does not
    /// resolve.
    #[arg(long, global = true)]
    pub case_insensitive: bool,

    /// Skip symlinks during traversal instead of following them
    #[arg(long, global = true)]
    pub no_follow_symlinks: bool,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PATHENT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The case flag given on the command line, if any.
    pub fn case_flag(&self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.case_insensitive {
            Some(false)
        } else {
            None
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe a path: name, suffixes, stem, and what it is
    Info(InfoCommand),

    /// List the direct children of a directory
    Ls(LsCommand),

    /// Walk a directory tree bottom-up
    Walk(WalkCommand),

    /// Find files whose names match a pattern
    Glob(GlobCommand),

    /// Check whether two paths refer to the same file
    SameFile(SameFileCommand),

    /// Print the current working directory
    Cwd(CwdCommand),

    /// Print the home directory
    Home(HomeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
