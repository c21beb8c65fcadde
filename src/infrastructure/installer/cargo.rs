//! `cargo install` adapter

use std::process::{Command, Stdio};

use crate::domain::ports::PackageInstaller;
use crate::error::{Tunn8nError, Tunn8nResult};

pub const DEFAULT_CARGO_BIN: &str = "cargo";

/// Reinstalls through `cargo install <package> --force`, output passed through
#[derive(Debug, Clone)]
pub struct CargoInstaller {
    bin: String,
}

impl CargoInstaller {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn args(package: &str) -> [&str; 3] {
        ["install", package, "--force"]
    }
}

impl Default for CargoInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_CARGO_BIN)
    }
}

impl PackageInstaller for CargoInstaller {
    fn describe(&self, package: &str) -> String {
        format!("{} {}", self.bin, Self::args(package).join(" "))
    }

    fn reinstall(&self, package: &str) -> Tunn8nResult<()> {
        let command = self.describe(package);
        tracing::debug!(%command, "running");

        let status = Command::new(&self.bin)
            .args(Self::args(package))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Tunn8nError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Tunn8nError::SubprocessFailure {
                command,
                code: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}
