//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's configuration
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak outside configuration into tests.
const ISOLATED_VARS: [&str; 6] = [
    "PATHENT_CASE_SENSITIVE",
    "PATHENT_FOLLOW_SYMLINKS",
    "PATHENT_PATTERN_MODE",
    "PATHENT_OUTPUT_FORMAT",
    "PATHENT_CONFIG_DIR",
    "PATHENT_LOG_MODE",
];

/// Test environment with an isolated workspace and config directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory the commands run in.
    pub work_dir: PathBuf,
    /// User configuration directory passed via --config-dir.
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty `work` and `config` directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathent").expect("Failed to find pathent binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// The workspace directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Create a directory (and parents) under the workspace.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and parent directories) under the workspace.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, relative).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Write a project `pathent.yaml` in the workspace.
    pub fn write_project_config(&self, contents: &str) {
        std::fs::write(self.work_dir.join("pathent.yaml"), contents)
            .expect("Failed to write project config");
    }

    /// Run a command that must succeed and return its stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathent");

        assert!(
            output.status.success(),
            "pathent {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Last path component of each non-empty output line, sorted.
#[allow(dead_code)]
pub fn sorted_names(output: &str) -> Vec<String> {
    let mut names: Vec<String> = output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            Path::new(line)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    names.sort();
    names
}
