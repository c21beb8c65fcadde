//! Start Options

use std::time::Duration;

use crate::config::Config;

use super::super::layout::ProjectLayout;

/// Options for the start use case
#[derive(Debug, Clone)]
pub struct StartOptions {
    pub layout: ProjectLayout,
    /// Keys that must be set before starting without a prompt
    pub required_keys: Vec<String>,
    /// Containers matching any of these are removed before launch
    pub cleanup_filters: Vec<String>,
    /// Wait between `up -d` and the post-start snapshot
    pub post_start_delay: Duration,
    /// Log lines shown in the post-start snapshot
    pub log_lines: usize,
    /// n8n port inside its container, used when `.env` has no `N8N_PORT`
    pub default_port: u16,
}

impl StartOptions {
    pub fn from_config(layout: ProjectLayout, config: &Config) -> Self {
        Self {
            layout,
            required_keys: config.env.required.clone(),
            cleanup_filters: config.containers.cleanup_filters.clone(),
            post_start_delay: config.diagnostics.post_start_delay(),
            log_lines: config.diagnostics.start_log_lines,
            default_port: config.diagnostics.n8n_port,
        }
    }
}
