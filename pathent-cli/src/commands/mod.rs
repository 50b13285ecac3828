//! CLI command implementations.
//!
//! - `info`: Describe a single path
//! - `ls`: List direct children of a directory
//! - `walk`: Post-order walk, optionally depth-limited
//! - `glob`: Suffix or shell-pattern matching, optionally recursive
//! - `same_file`: Compare two paths by file identity
//! - `cwd`, `home`: Print well-known directories
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod cwd;
pub mod glob;
pub mod home;
pub mod info;
pub mod ls;
pub mod same_file;
pub mod walk;

pub use completions::CompletionsCommand;
pub use cwd::CwdCommand;
pub use glob::GlobCommand;
pub use home::HomeCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use same_file::SameFileCommand;
pub use walk::WalkCommand;
