//! Shared helpers for integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated config, data and state locations for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    pub fn state_contents(&self) -> String {
        std::fs::read_to_string(self.state_file()).unwrap_or_default()
    }

    /// `folio` with the sandboxed environment and state file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("folio binary is built");
        cmd.env("NO_COLOR", "1")
            .env("FOLIO_CONFIG", self.config_path())
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("HOME", self.dir.path())
            .env_remove("FOLIO_LOG")
            .arg("--state-file")
            .arg(self.state_file());
        cmd
    }

    /// Run with `args` and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("Failed to execute folio");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}
