//! In-memory engine for use case tests

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::entities::{
    ContainerDetail, ContainerFilter, ContainerInfo, NetworkInfo, ResourceStats,
};
use crate::domain::ports::ContainerEngineClient;
use crate::domain::value_objects::ComposeCommand;
use crate::error::{Tunn8nError, Tunn8nResult};

fn failure(command: impl Into<String>) -> Tunn8nError {
    Tunn8nError::SubprocessFailure {
        command: command.into(),
        code: Some(1),
        stderr: "simulated failure".to_string(),
    }
}

pub fn container(name: &str, state: &str, ports: &str) -> ContainerInfo {
    ContainerInfo {
        name: name.to_string(),
        status: if state == "running" {
            "Up 2 minutes".to_string()
        } else {
            "Exited (1) 1 minute ago".to_string()
        },
        ports: ports.to_string(),
        state: state.to_string(),
    }
}

/// Scriptable [`ContainerEngineClient`] that records every call
pub struct FakeEngine {
    engine_ok: bool,
    daemon_ok: bool,
    compose_available: Vec<ComposeCommand>,
    containers: Vec<ContainerInfo>,
    list_fails: bool,
    failing_removals: Vec<String>,
    /// (spelling or any, first compose arg)
    failing_compose: Vec<(Option<ComposeCommand>, String)>,
    details: HashMap<String, ContainerDetail>,
    logs: HashMap<String, String>,
    networks: Option<Vec<NetworkInfo>>,
    stats: Option<ResourceStats>,
    calls: Mutex<Vec<String>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            engine_ok: true,
            daemon_ok: true,
            compose_available: ComposeCommand::PROBE_ORDER.to_vec(),
            containers: Vec::new(),
            list_fails: false,
            failing_removals: Vec::new(),
            failing_compose: Vec::new(),
            details: HashMap::new(),
            logs: HashMap::new(),
            networks: Some(Vec::new()),
            stats: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_engine(mut self) -> Self {
        self.engine_ok = false;
        self.daemon_ok = false;
        self
    }

    pub fn daemon_down(mut self) -> Self {
        self.daemon_ok = false;
        self
    }

    pub fn without_compose(mut self, compose: ComposeCommand) -> Self {
        self.compose_available.retain(|c| *c != compose);
        self
    }

    pub fn with_containers(mut self, containers: Vec<ContainerInfo>) -> Self {
        self.containers = containers;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn failing_removal(mut self, name: &str) -> Self {
        self.failing_removals.push(name.to_string());
        self
    }

    /// Make `<compose> <subcommand>` fail; `None` matches either spelling
    pub fn failing_compose(mut self, compose: Option<ComposeCommand>, subcommand: &str) -> Self {
        self.failing_compose.push((compose, subcommand.to_string()));
        self
    }

    pub fn with_detail(mut self, detail: ContainerDetail) -> Self {
        self.details.insert(detail.name.clone(), detail);
        self
    }

    pub fn with_logs(mut self, name: &str, text: &str) -> Self {
        self.logs.insert(name.to_string(), text.to_string());
        self
    }

    pub fn with_networks(mut self, networks: Vec<NetworkInfo>) -> Self {
        self.networks = Some(networks);
        self
    }

    pub fn failing_networks(mut self) -> Self {
        self.networks = None;
        self
    }

    pub fn with_stats(mut self, stats: ResourceStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls starting with `prefix`
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ContainerEngineClient for FakeEngine {
    fn engine_version(&self) -> Tunn8nResult<String> {
        self.record("version".to_string());
        if self.engine_ok {
            Ok("Docker version 27.0.3, build 7d4bcd8".to_string())
        } else {
            Err(failure("docker --version"))
        }
    }

    fn ping(&self) -> Tunn8nResult<()> {
        self.record("ping".to_string());
        if self.daemon_ok {
            Ok(())
        } else {
            Err(failure("docker info"))
        }
    }

    fn compose_version(&self, compose: ComposeCommand) -> Tunn8nResult<String> {
        self.record(format!("compose-version {}", compose));
        if self.compose_available.contains(&compose) {
            Ok("2.29.1".to_string())
        } else {
            Err(failure(format!("{} version", compose)))
        }
    }

    fn list_containers(&self, filter: &ContainerFilter) -> Tunn8nResult<Vec<ContainerInfo>> {
        self.record(format!(
            "ps {}{}",
            filter.names.join(","),
            if filter.all { " -a" } else { "" }
        ));
        if self.list_fails {
            return Err(failure("docker ps"));
        }
        Ok(self
            .containers
            .iter()
            .filter(|c| filter.matches(&c.name))
            .filter(|c| filter.all || c.is_running())
            .cloned()
            .collect())
    }

    fn inspect(&self, name: &str) -> Tunn8nResult<Option<ContainerDetail>> {
        self.record(format!("inspect {}", name));
        Ok(self.details.get(name).cloned())
    }

    fn logs(&self, name: &str, tail: usize) -> Tunn8nResult<String> {
        self.record(format!("logs {} {}", name, tail));
        self.logs
            .get(name)
            .cloned()
            .ok_or_else(|| failure(format!("docker logs {}", name)))
    }

    fn list_networks(&self, name_filter: &str) -> Tunn8nResult<Vec<NetworkInfo>> {
        self.record(format!("networks {}", name_filter));
        self.networks
            .clone()
            .ok_or_else(|| failure("docker network ls"))
    }

    fn stats(&self, name: &str) -> Tunn8nResult<ResourceStats> {
        self.record(format!("stats {}", name));
        self.stats
            .clone()
            .ok_or_else(|| failure(format!("docker stats {}", name)))
    }

    fn remove_container(&self, name: &str) -> Tunn8nResult<()> {
        self.record(format!("rm {}", name));
        if self.failing_removals.iter().any(|n| n == name) {
            Err(failure(format!("docker rm -f {}", name)))
        } else {
            Ok(())
        }
    }

    fn compose(
        &self,
        compose: ComposeCommand,
        _project_dir: &Path,
        args: &[&str],
    ) -> Tunn8nResult<()> {
        let line = format!("compose {} {}", compose, args.join(" "));
        self.record(line.clone());
        let sub = args.first().copied().unwrap_or_default();
        let fails = self
            .failing_compose
            .iter()
            .any(|(c, s)| (c.is_none() || *c == Some(compose)) && s == sub);
        if fails {
            Err(failure(line))
        } else {
            Ok(())
        }
    }
}
