//! Build script for pathent-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect paths, walk directory trees, and match files")
        .long_about(
            "Command-line tool for path decomposition, directory traversal, and file name matching",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("case-sensitive")
                .long("case-sensitive")
                .help("Keep path case as written")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("case-insensitive")
                .long("case-insensitive")
                .help("Fold paths to lowercase")
                .long_help(
                    "Fold paths to lowercase. Printed paths are folded as well. On a \
                     case-sensitive filesystem a folded path to a file with uppercase \
                     letters in its name does not resolve.",
                )
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-follow-symlinks")
                .long("no-follow-symlinks")
                .help("Skip symlinks during traversal instead of following them")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .global(true),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("PATHENT_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("info")
                .about("Describe a path: name, suffixes, stem, and what it is")
                .long_about("Show the decomposition of a path and whether it exists"),
            Command::new("ls")
                .about("List the direct children of a directory")
                .long_about("List every entry directly inside a directory"),
            Command::new("walk")
                .about("Walk a directory tree bottom-up")
                .long_about(
                    "Report each directory with its regular files, children before parents",
                ),
            Command::new("glob")
                .about("Find files whose names match a pattern")
                .long_about("Match file names by literal suffix or shell glob"),
            Command::new("same-file")
                .about("Check whether two paths refer to the same file")
                .long_about("Compare two paths by device and inode"),
            Command::new("cwd")
                .about("Print the current working directory")
                .long_about("Print the current working directory as a normalized path"),
            Command::new("home")
                .about("Print the home directory")
                .long_about("Print the current user's home directory as a normalized path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathent.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
