//! Docker CLI adapter
//!
//! Implements [`ContainerEngineClient`] by shelling out to the `docker` and
//! `docker-compose` binaries and decoding their JSON output.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::format;
use crate::domain::entities::{
    ContainerDetail, ContainerFilter, ContainerInfo, NetworkInfo, ResourceStats,
};
use crate::domain::ports::ContainerEngineClient;
use crate::domain::value_objects::ComposeCommand;
use crate::error::{Tunn8nError, Tunn8nResult};

/// Engine binary used when nothing else is configured
pub const DEFAULT_ENGINE_BIN: &str = "docker";

/// Container engine reached through its command-line client
#[derive(Debug, Clone)]
pub struct DockerCli {
    bin: String,
}

impl DockerCli {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Run the engine binary and capture its output
    fn run(&self, args: &[&str]) -> Tunn8nResult<String> {
        capture(&self.bin, args)
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_BIN)
    }
}

fn render(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capture(program: &str, args: &[&str]) -> Tunn8nResult<String> {
    let command = render(program, args);
    tracing::debug!(%command, "running");

    let output: Output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Tunn8nError::SpawnFailed {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::debug!(%command, code = ?output.status.code(), "failed");
        return Err(Tunn8nError::SubprocessFailure {
            command,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_error(command: &str, err: serde_json::Error) -> Tunn8nError {
    Tunn8nError::Parse {
        command: command.to_string(),
        message: err.to_string(),
    }
}

impl ContainerEngineClient for DockerCli {
    fn engine_version(&self) -> Tunn8nResult<String> {
        self.run(&["--version"]).map(|out| out.trim().to_string())
    }

    fn ping(&self) -> Tunn8nResult<()> {
        let command = render(&self.bin, &["info"]);
        tracing::debug!(%command, "running");
        let status = Command::new(&self.bin)
            .arg("info")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| Tunn8nError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Tunn8nError::SubprocessFailure {
                command,
                code: status.code(),
                stderr: String::new(),
            })
        }
    }

    fn compose_version(&self, compose: ComposeCommand) -> Tunn8nResult<String> {
        let (program, mut args) = compose.program(&self.bin);
        args.extend_from_slice(compose.version_args());
        capture(program, &args).map(|out| out.trim().to_string())
    }

    fn list_containers(&self, filter: &ContainerFilter) -> Tunn8nResult<Vec<ContainerInfo>> {
        let name_filters: Vec<String> = filter.names.iter().map(|n| format!("name={}", n)).collect();

        let mut args = vec!["ps"];
        if filter.all {
            args.push("-a");
        }
        for f in &name_filters {
            args.push("--filter");
            args.push(f);
        }
        args.extend(["--format", "{{json .}}"]);

        let out = self.run(&args)?;
        format::parse_ps(&out).map_err(|e| parse_error(&render(&self.bin, &args), e))
    }

    fn inspect(&self, name: &str) -> Tunn8nResult<Option<ContainerDetail>> {
        let args = ["inspect", "--type", "container", name];
        match self.run(&args) {
            Ok(out) => format::parse_inspect(&out).map_err(|e| parse_error(&render(&self.bin, &args), e)),
            Err(Tunn8nError::SubprocessFailure { stderr, .. }) if stderr.contains("No such") => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn logs(&self, name: &str, tail: usize) -> Tunn8nResult<String> {
        let tail = tail.to_string();
        let args = ["logs", "--tail", tail.as_str(), name];
        let command = render(&self.bin, &args);
        tracing::debug!(%command, "running");

        // Containers write to both streams; keep them together
        let output = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Tunn8nError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Tunn8nError::SubprocessFailure {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    fn list_networks(&self, name_filter: &str) -> Tunn8nResult<Vec<NetworkInfo>> {
        let filter = format!("name={}", name_filter);
        let args = ["network", "ls", "--filter", filter.as_str(), "--format", "{{json .}}"];
        let out = self.run(&args)?;
        format::parse_networks(&out).map_err(|e| parse_error(&render(&self.bin, &args), e))
    }

    fn stats(&self, name: &str) -> Tunn8nResult<ResourceStats> {
        let args = ["stats", "--no-stream", "--format", "{{json .}}", name];
        let command = render(&self.bin, &args);
        let out = self.run(&args)?;
        format::parse_stats(&out)
            .map_err(|e| parse_error(&command, e))?
            .into_iter()
            .next()
            .ok_or_else(|| Tunn8nError::Parse {
                command,
                message: "no stats row returned".to_string(),
            })
    }

    fn remove_container(&self, name: &str) -> Tunn8nResult<()> {
        self.run(&["rm", "-f", name]).map(|_| ())
    }

    fn compose(
        &self,
        compose: ComposeCommand,
        project_dir: &Path,
        args: &[&str],
    ) -> Tunn8nResult<()> {
        let (program, mut full) = compose.program(&self.bin);
        full.extend_from_slice(args);
        let command = render(program, &full);
        tracing::debug!(%command, dir = %project_dir.display(), "running");

        let status = Command::new(program)
            .args(&full)
            .current_dir(project_dir)
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
