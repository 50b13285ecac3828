//! Configuration file discovery and loading.
//!
//! This module finds pathent configuration files and loads them with their
//! precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-directory configuration file.
pub const PROJECT_CONFIG_FILE: &str = "pathent.yaml";

/// Name of the user configuration file inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathent::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.pathent/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use pathent::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.pathent/config.yaml` (precedence 1)
    /// 2. `pathent.yaml` in `working_dir` or its nearest ancestor that has one (precedence 2)
    ///
    /// `config_dir` replaces `~/.pathent` as the user config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);
        log::debug!("loaded {} configuration source(s)", sources.len());

        Ok(sources)
    }

    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = if let Some(dir) = config_dir {
            dir.join(USER_CONFIG_FILE)
        } else {
            match Self::user_config_path() {
                Some(path) => path,
                None => return Ok(None),
            }
        };

        if !config_path.is_file() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest `pathent.yaml`, starting at `start_dir` and walking up.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
        }
        Ok(None)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// The default user config file, `~/.pathent/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".pathent").join(USER_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "output_format: json\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_no_config() {
        let temp_dir = TempDir::new().unwrap();
        let found = ConfigLoader::discover_project_config(temp_dir.path()).unwrap();
        // An ancestor of the temp dir could carry one, but never the temp dir itself.
        if let Some(source) = found {
            assert_ne!(source.path.parent(), Some(temp_dir.path()));
        }
    }

    #[test]
    fn test_discover_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "follow_symlinks: false\n").unwrap();

        let source = ConfigLoader::discover_project_config(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.config.follow_symlinks, Some(false));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child").join("grandchild");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "case_sensitive: true\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child).unwrap().unwrap();
        assert_eq!(source.path, temp_dir.path().join(PROJECT_CONFIG_FILE));
    }

    #[test]
    fn test_discover_stops_at_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "case_sensitive: true\n").unwrap();
        fs::write(child.join(PROJECT_CONFIG_FILE), "case_sensitive: false\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child).unwrap().unwrap();
        assert_eq!(source.config.case_sensitive, Some(false));
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let user_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        fs::write(user_dir.path().join(USER_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(project_dir.path().join(PROJECT_CONFIG_FILE), "output_format: text\n").unwrap();

        let sources = ConfigLoader::load_all(project_dir.path(), Some(user_dir.path())).unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }

    #[test]
    fn test_missing_user_config_is_skipped() {
        let user_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        fs::write(project_dir.path().join(PROJECT_CONFIG_FILE), "{}\n").unwrap();

        let sources = ConfigLoader::load_all(project_dir.path(), Some(user_dir.path())).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].precedence, 2);
    }
}
