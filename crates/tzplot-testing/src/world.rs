//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temporary directory with its own configuration file,
//! runs the binary with `--config` pointing there and pins the process
//! timezone to UTC so plotted output is reproducible.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tzplot_types::Config;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use tzplot_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_config(&fixtures::berlin_only());
///
/// let result = world.run(&["1985-08-24T14:00:00Z"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment without a config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("tzplot").join("config.toml");

        let mut env_vars = HashMap::new();
        env_vars.insert("TZ".to_string(), "UTC".to_string());

        Self {
            temp_dir,
            config_path,
            env_vars,
        }
    }

    /// Path passed to `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `config` as the configuration file.
    pub fn with_config(self, config: &Config) -> Self {
        fixtures::write_config(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Write raw text as the configuration file.
    pub fn with_config_text(self, text: &str) -> Self {
        fixtures::write_text(&self.config_path, text).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read back the configuration file as the binary left it.
    pub fn read_config(&self) -> Result<Config> {
        let text = std::fs::read_to_string(&self.config_path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TZPLOT_CONFIG").env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a CLI command for the binary at `bin_path`.
    pub fn command_from_path(&self, bin_path: impl AsRef<std::ffi::OsStr>) -> Command {
        let mut cmd = Command::new(bin_path);
        self.configure_command(&mut cmd);
        cmd
    }

    /// Execute the tzplot binary with `args` and collect its output.
    ///
    /// # Note
    /// This uses `Command::cargo_bin()`, which requires the binary to be
    /// built in the cargo target directory (cargo test does this).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tzplot")
            .map_err(|e| anyhow::anyhow!("Failed to find tzplot binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Stdout split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
