//! Path values and the filesystem operations built on them.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! A [`PathEntity`] stores its path as a string normalized by an explicit
//! [`CaseSensitivity`]. The host convention (insensitive on Windows,
//! sensitive elsewhere) is only the default.
//!
//! ## Decomposition
//!
//! `name`, `suffix`, `suffixes`, and `stem` are pure string functions over
//! the stored path (see [`decompose`]).
//!
//! ## Queries
//!
//! `is_dir` and `is_file` read every failure as `false`. `exists` reads
//! absence as `false` but reports failures that leave existence undecided,
//! such as a permission-denied ancestor.
//!
//! ## Traversal
//!
//! `scan`, `walk`, `limited_walk`, `glob`, and `rglob` return lazy
//! iterators. Each one checks its root up front and fails with
//! `NotADirectory` before producing anything. Recursive traversals run on an
//! explicit stack with symlink-loop detection, and every directory handle is
//! released as soon as the iterator is dropped.
//!
//! # Examples
//!
//! ```no_run
//! use pathent::PathEntity;
//!
//! let project = PathEntity::cwd().unwrap();
//! for entry in project.limited_walk(1, false).unwrap() {
//!     let entry = entry.unwrap();
//!     println!("{}: {} files", entry.path(), entry.files().len());
//! }
//!
//! for source in project.rglob(".rs").unwrap() {
//!     println!("{}", source.unwrap());
//! }
//! ```

pub mod decompose;
mod entity;
pub mod identity;
pub mod normalize;
pub mod pattern;
mod scan;
mod traverse;
mod types;
pub mod walk;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use entity::PathEntity;
pub use identity::{FileIdentity, StatSource};
pub use normalize::CaseSensitivity;
pub use pattern::{Glob, Pattern, PatternMode, RGlob};
pub use scan::ScanChildren;
pub use types::{WalkEntry, WalkOptions};
pub use walk::{LimitedWalk, Walk};
