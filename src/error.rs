//! Error types for tunn8n
//!
//! Uses `thiserror` for library errors; command handlers wrap these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tunn8n operations
pub type Tunn8nResult<T> = Result<T, Tunn8nError>;

/// Main error type for tunn8n operations
#[derive(Error, Debug)]
pub enum Tunn8nError {
    /// Target directory for `create` already exists
    #[error("directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    /// Template root is not present
    #[error("template directory not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    /// No compose descriptor in the project directory
    #[error("{} not found! Make sure you're in the project directory.", path.display())]
    DescriptorMissing { path: PathBuf },

    /// Container engine not installed or daemon not running
    #[error("Docker is not installed or not running")]
    EngineUnavailable,

    /// Neither compose spelling answered its version probe
    #[error("neither docker-compose nor docker compose is available")]
    OrchestratorUnavailable,

    /// An external command exited non-zero
    #[error("`{command}` failed{}{}", exit_suffix(*code), stderr_suffix(stderr))]
    SubprocessFailure {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external command could not be spawned at all
    #[error("failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Output of an external command could not be decoded
    #[error("unexpected output from `{command}`: {message}")]
    Parse { command: String, message: String },

    /// Invalid tool configuration
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
