//! Configuration module for tunn8n
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TUNN8N_*)
//! 3. Project config (./tunn8n.toml)
//! 4. User config (~/.config/tunn8n/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only one config file is read: the project file when present, otherwise the
//! user file.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ContainersConfig, DiagnosticsConfig, EngineConfig, EnvConfig,
    OutputConfig, ProjectConfig, TemplateConfig,
};
