//! Common test utilities for Wiser CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory and home directory,
//! plus helpers to run the `wiser` binary inside them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Wiser CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("event line is not JSON"))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory the CLI runs in
    pub project_root: TempDir,
    /// Temporary directory for HOME / XDG_CONFIG_HOME
    pub home_dir: TempDir,
    wiser_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            wiser_bin: PathBuf::from(env!("CARGO_BIN_EXE_wiser")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default store location inside the project
    pub fn store_path(&self) -> PathBuf {
        self.project_path(".wiser/publish.toml")
    }

    /// Write a project config file (`.wiser/config.toml`)
    pub fn write_config(&self, content: &str) {
        let path = self.project_path(".wiser/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Replace the store file with hand-written TOML
    pub fn write_store(&self, content: &str) {
        let path = self.store_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Read the store file, or an empty string if it was never written
    pub fn read_store(&self) -> String {
        std::fs::read_to_string(self.store_path()).unwrap_or_default()
    }

    /// Run wiser in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run wiser with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.wiser_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path())
            .env("USER", "tester")
            .env_remove("WISER_STORE")
            .env_remove("WISER_USER")
            .env_remove("WISER_VERBOSITY")
            .env_remove("WISER_JSON")
            .env_remove("WISER_DRY_RUN");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wiser");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Create `count` versions of an item, asserting each succeeds
    pub fn create_versions(&self, kind: &str, id: &str, count: usize) {
        for _ in 0..count {
            let result = self.run(&["new-version", kind, id]);
            assert!(result.is_success(), "new-version failed:\n{}", result.combined_output());
        }
    }
}
