//! Test environment builder for isolated tunn8n testing.
//!
//! Every run gets its own working directory and home, color off, no
//! post-start delay, and an engine binary that does not exist unless a test
//! points `TUNN8N_ENGINE_BIN` somewhere else.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Engine binary that is guaranteed to be missing
pub const MISSING_ENGINE: &str = "/nonexistent/tunn8n-test/docker";

/// Result of running a tunn8n CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_tunn8n")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run tunn8n in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run tunn8n from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TUNN8N_COLOR", "never")
            .env("TUNN8N_ENGINE_BIN", MISSING_ENGINE)
            .env("TUNN8N_POST_START_DELAY", "0")
            .env_remove("TUNN8N_TEMPLATE_DIR")
            .env_remove("TUNN8N_REQUIRED_KEYS")
            .env_remove("TUNN8N_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tunn8n");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Write a user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self.home_dir.path().join(".config/tunn8n/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, content).expect("Failed to write config");
    }

    /// Install a shell script standing in for the Docker CLI.
    ///
    /// `body` runs under `sh` with the arguments in `$@`; every invocation is
    /// appended to `docker.log` in the home directory.
    #[cfg(unix)]
    pub fn fake_docker(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.docker_log_path();
        let path = self.home_dir.path().join("fake-docker");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        std::fs::write(&path, script).expect("Failed to write fake docker");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake docker");
        path
    }

    pub fn docker_log_path(&self) -> PathBuf {
        self.home_dir.path().join("docker.log")
    }

    /// Invocations recorded by the fake docker, one per line
    pub fn docker_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.docker_log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
