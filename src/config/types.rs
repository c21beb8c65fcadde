//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Tunn8nResult;

use super::loader;
use super::ConfigWarning;

/// Project file names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub compose_file: String,
    pub env_file: String,
    pub env_example: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            compose_file: "docker-compose.yml".to_string(),
            env_file: ".env".to_string(),
            env_example: ".env.example".to_string(),
        }
    }
}

/// Environment file validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Keys that must have a non-empty value before `start` runs unprompted
    pub required: Vec<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            required: vec!["NGROK_AUTHTOKEN".to_string(), "N8N_PORT".to_string()],
        }
    }
}

/// Container name filters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainersConfig {
    /// Containers matching any of these are removed before `start`
    pub cleanup_filters: Vec<String>,
    /// Filter for the status table
    pub status_filter: String,
    /// Container inspected by `debug`
    pub primary: String,
    pub network_filter: String,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            cleanup_filters: vec![
                "n8n".to_string(),
                "postgres".to_string(),
                "ngrok".to_string(),
            ],
            status_filter: "n8n".to_string(),
            primary: "n8n-app".to_string(),
            network_filter: "n8n".to_string(),
        }
    }
}

/// Diagnostics and post-start checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Wait before the post-start snapshot
    pub post_start_delay_secs: u64,
    pub start_log_lines: usize,
    pub status_log_lines: usize,
    pub debug_log_lines: usize,
    pub health_path: String,
    /// Port n8n listens on inside its container
    pub n8n_port: u16,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            post_start_delay_secs: 3,
            start_log_lines: 5,
            status_log_lines: 5,
            debug_log_lines: 10,
            health_path: "/healthz".to_string(),
            n8n_port: 5678,
        }
    }
}

impl DiagnosticsConfig {
    pub fn post_start_delay(&self) -> Duration {
        Duration::from_secs(self.post_start_delay_secs)
    }
}

/// Container engine client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub binary: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
        }
    }
}

/// Template used by `create`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory to copy instead of the built-in template
    pub dir: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub env: EnvConfig,
    pub containers: ContainersConfig,
    pub diagnostics: DiagnosticsConfig,
    pub engine: EngineConfig,
    pub template: TemplateConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Tunn8nResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Tunn8nResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TUNN8N_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn compose_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.compose_file)
    }

    pub fn env_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.env_file)
    }

    pub fn env_example_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.env_example)
    }
}
