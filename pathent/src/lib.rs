#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathent
//!
//! Object-style filesystem paths.
//!
//! A [`PathEntity`] wraps a normalized path string and answers questions
//! about it: how it decomposes into name, stem, and suffixes; whether it
//! exists and what it is; and what lies beneath it, through lazy scans,
//! post-order walks, and pattern matches.
//!
//! ## Core Types
//!
//! - [`PathEntity`]: A normalized path with decomposition, queries, and traversal
//! - [`CaseSensitivity`]: How path strings are normalized and compared
//! - [`WalkEntry`] and [`WalkOptions`]: Walk results and traversal settings
//! - [`Pattern`] and [`PatternMode`]: File name matching for `glob` and `rglob`
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathent::{CaseSensitivity, PathEntity};
//!
//! let archive = PathEntity::with_case("backups/site.tar.gz", CaseSensitivity::Sensitive);
//! assert_eq!(archive.name(), "site.tar.gz");
//! assert_eq!(archive.suffix(), ".gz");
//! assert_eq!(archive.suffixes(), vec![".tar", ".gz"]);
//! assert_eq!(archive.stem(), "site.tar");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    CaseSensitivity, FileIdentity, Glob, LimitedWalk, PathEntity, Pattern, PatternMode, RGlob,
    ScanChildren, StatSource, Walk, WalkEntry, WalkOptions,
};
