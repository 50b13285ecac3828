//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathent::config::{Config, ConfigMerger};
///
/// let low = Config { case_sensitive: Some(false), ..Default::default() };
/// let high = Config { case_sensitive: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.case_sensitive, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.follow_symlinks.is_some() {
            target.follow_symlinks = source.follow_symlinks;
        }

        if source.pattern_mode.is_some() {
            target.pattern_mode = source.pattern_mode;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
