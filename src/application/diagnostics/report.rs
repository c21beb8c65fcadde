//! Diagnostics report
//!
//! Plain data; each section carries its own failure so one broken query
//! never hides the others.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::entities::{ContainerDetail, ContainerInfo, NetworkInfo, ResourceStats};
use crate::domain::ports::HealthStatus;
use crate::domain::services::EnvReport;

use super::options::Profile;

/// A section's data, or the error message that replaced it
pub type Section<T> = Result<T, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExcerpt {
    pub container: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSection {
    pub networks: Vec<NetworkInfo>,
    /// (network, IP) of the primary container
    pub addresses: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProbe {
    pub container: String,
    pub url: String,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Service the verdict is about (container name or filter)
    pub service: String,
    pub running: bool,
    /// Restart count of the primary container (debug profile)
    pub restart_count: Option<u32>,
    /// Command that would bring the service back
    pub hint: Option<String>,
    pub finished_at: DateTime<Local>,
}

impl Summary {
    pub fn is_crash_looping(&self) -> bool {
        self.restart_count.is_some_and(|n| n > 0)
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticsReport {
    pub profile: Profile,
    pub env_path: PathBuf,
    pub env: EnvReport,
    pub containers: Section<Vec<ContainerInfo>>,
    /// Debug profile only; `Ok(None)` when the container does not exist
    pub primary: Option<Section<Option<ContainerDetail>>>,
    /// `None` when there is no container to read logs from
    pub logs: Option<Section<LogExcerpt>>,
    /// Debug profile only
    pub networks: Option<Section<NetworkSection>>,
    /// Debug profile only
    pub stats: Option<Section<ResourceStats>>,
    /// Status profile only
    pub health: Vec<HealthProbe>,
    pub summary: Summary,
}
