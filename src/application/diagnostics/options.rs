//! Diagnostics Options

use crate::config::Config;

use super::super::layout::ProjectLayout;

/// Which sections a diagnostics run collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Container table, recent logs, HTTP health
    Status,
    /// Container table, inspect, logs, networks, resource usage
    Debug,
}

#[derive(Debug, Clone)]
pub struct DiagnosticsOptions {
    pub profile: Profile,
    pub layout: ProjectLayout,
    pub required_keys: Vec<String>,
    /// Name filter for the container table
    pub status_filter: String,
    /// Container inspected in the debug profile
    pub primary: String,
    pub network_filter: String,
    pub log_lines: usize,
    pub health_path: String,
    /// Container port whose host mapping gets the health probe
    pub n8n_port: u16,
}

impl DiagnosticsOptions {
    pub fn from_config(profile: Profile, layout: ProjectLayout, config: &Config) -> Self {
        let log_lines = match profile {
            Profile::Status => config.diagnostics.status_log_lines,
            Profile::Debug => config.diagnostics.debug_log_lines,
        };
        Self {
            profile,
            layout,
            required_keys: config.env.required.clone(),
            status_filter: config.containers.status_filter.clone(),
            primary: config.containers.primary.clone(),
            network_filter: config.containers.network_filter.clone(),
            log_lines,
            health_path: config.diagnostics.health_path.clone(),
            n8n_port: config.diagnostics.n8n_port,
        }
    }
}
