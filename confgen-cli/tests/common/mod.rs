//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers insulated from the caller's environment
//! - Document fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small service-style document used across tests.
#[allow(dead_code)]
pub const SERVICE_DOC: &str = "\
general:
  type: http
  ws_listen_port: 9311
  server:
    port: \":9311\"
redis:
  addrs:
    - \"127.0.0.1:6379\"
  password: secret
";

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the confgen binary.
    ///
    /// The command runs inside the test's temporary directory with the
    /// CONFGEN_* environment variables cleared, so the caller's
    /// environment cannot leak defaults into a test.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("confgen").expect("Failed to find confgen binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("CONFGEN_OUTPUT")
            .env_remove("CONFGEN_NAME")
            .env_remove("CONFGEN_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a document into the test environment and return its path.
    pub fn write_doc(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write test document");
        path
    }

    /// Run a full generation and return the path printed on stdout.
    ///
    /// # Panics
    /// Panics if the command fails or does not print a usable path.
    pub fn generate_simple(&self, doc: &Path, name: &str) -> PathBuf {
        let output = self
            .command()
            .arg("--file")
            .arg(doc)
            .arg("--output")
            .arg(self.temp_path.join("out"))
            .arg("--name")
            .arg(name)
            .output()
            .expect("Failed to run confgen");

        assert!(
            output.status.success(),
            "Generation failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        PathBuf::from(stdout.trim())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
