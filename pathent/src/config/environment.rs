//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHENT_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::PatternMode;
use clap::ValueEnum;
use std::env;

/// Overrides `case_sensitive`.
pub const CASE_SENSITIVE_ENV: &str = "PATHENT_CASE_SENSITIVE";
/// Overrides `follow_symlinks`.
pub const FOLLOW_SYMLINKS_ENV: &str = "PATHENT_FOLLOW_SYMLINKS";
/// Overrides `pattern_mode`.
pub const PATTERN_MODE_ENV: &str = "PATHENT_PATTERN_MODE";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "PATHENT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathent::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        if let Ok(val) = env::var(FOLLOW_SYMLINKS_ENV) {
            config.follow_symlinks = Some(Self::parse_bool(FOLLOW_SYMLINKS_ENV, &val)?);
        }

        if let Ok(val) = env::var(PATTERN_MODE_ENV) {
            config.pattern_mode = Some(Self::parse_enum::<PatternMode>(PATTERN_MODE_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(Self::parse_enum::<OutputFormat>(OUTPUT_FORMAT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    ///
    /// Accepts `true/1/yes/on` and `false/0/no/off`, in any case.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: {s}"),
            }),
        }
    }

    fn parse_enum<T: ValueEnum>(field: &str, s: &str) -> Result<T> {
        T::from_str(s.trim(), true).map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid value: {s}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var(k).ok())).collect();
        for (k, v) in vars {
            env::set_var(k, v);
        }
        f();
        for (k, v) in saved {
            match v {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for s in ["true", "TRUE", "1", "yes", "YES", "on", "ON", " on "] {
            assert!(EnvironmentConfig::parse_bool("test", s).unwrap(), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for s in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", s).unwrap(), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(
            EnvironmentConfig::parse_enum::<PatternMode>("test", "Shell").unwrap(),
            PatternMode::Shell
        );
        assert_eq!(
            EnvironmentConfig::parse_enum::<OutputFormat>("test", "json").unwrap(),
            OutputFormat::Json
        );
        assert!(EnvironmentConfig::parse_enum::<OutputFormat>("test", "xml").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides() {
        with_env(
            &[
                (CASE_SENSITIVE_ENV, "no"),
                (FOLLOW_SYMLINKS_ENV, "off"),
                (PATTERN_MODE_ENV, "shell"),
                (OUTPUT_FORMAT_ENV, "json"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.case_sensitive, Some(false));
                assert_eq!(config.follow_symlinks, Some(false));
                assert_eq!(config.pattern_mode, Some(PatternMode::Shell));
                assert_eq!(config.output_format, Some(OutputFormat::Json));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_override_names_variable() {
        with_env(&[(FOLLOW_SYMLINKS_ENV, "sometimes")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(err.to_string().contains(FOLLOW_SYMLINKS_ENV));
        });
    }
}
