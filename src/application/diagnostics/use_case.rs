//! Diagnostics Use Case
//!
//! Engine health first; if the daemon does not answer nothing else runs.
//! Every later section is collected independently.

use chrono::Local;

use crate::domain::entities::{ContainerDetail, ContainerFilter, ContainerInfo};
use crate::domain::ports::{ContainerEngineClient, HealthCheck};
use crate::domain::services::EnvReport;
use crate::error::Tunn8nResult;

use super::super::env_check::read_env_report;
use super::super::preflight::ensure_engine_ready;
use super::options::{DiagnosticsOptions, Profile};
use super::report::{DiagnosticsReport, HealthProbe, LogExcerpt, NetworkSection, Section, Summary};

pub struct DiagnosticsUseCase<E, H>
where
    E: ContainerEngineClient,
    H: HealthCheck,
{
    engine: E,
    health: H,
}

impl<E, H> DiagnosticsUseCase<E, H>
where
    E: ContainerEngineClient,
    H: HealthCheck,
{
    pub fn new(engine: E, health: H) -> Self {
        Self { engine, health }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn execute(&self, options: &DiagnosticsOptions) -> Tunn8nResult<DiagnosticsReport> {
        ensure_engine_ready(&self.engine)?;

        let env = read_env_report(&options.layout.env_file, &options.required_keys);

        let filter = ContainerFilter::name(options.status_filter.clone()).include_stopped();
        let containers: Section<Vec<ContainerInfo>> = self
            .engine
            .list_containers(&filter)
            .map_err(|e| e.to_string());

        let report = match options.profile {
            Profile::Status => self.status(options, env, containers),
            Profile::Debug => self.debug(options, env, containers),
        };
        Ok(report)
    }

    fn status(
        &self,
        options: &DiagnosticsOptions,
        env: EnvReport,
        containers: Section<Vec<ContainerInfo>>,
    ) -> DiagnosticsReport {
        let listed: &[ContainerInfo] = containers.as_deref().unwrap_or(&[]);

        let logs = listed.first().map(|c| {
            self.engine
                .logs(&c.name, options.log_lines)
                .map(|text| LogExcerpt {
                    container: c.name.clone(),
                    text,
                })
                .map_err(|e| e.to_string())
        });

        let health = listed
            .iter()
            .filter(|c| c.is_running())
            .flat_map(|c| {
                c.host_ports_for(options.n8n_port)
                    .into_iter()
                    .map(move |port| (c.name.clone(), port))
            })
            .map(|(container, port)| {
                let url = format!("http://localhost:{}{}", port, options.health_path);
                let status = self.health.probe(&url);
                HealthProbe {
                    container,
                    url,
                    status,
                }
            })
            .collect();

        let running = listed.iter().any(ContainerInfo::is_running);
        let summary = Summary {
            service: options.status_filter.clone(),
            running,
            restart_count: None,
            hint: None,
            finished_at: Local::now(),
        };

        DiagnosticsReport {
            profile: Profile::Status,
            env_path: options.layout.env_file.clone(),
            env,
            containers,
            primary: None,
            logs,
            networks: None,
            stats: None,
            health,
            summary,
        }
    }

    fn debug(
        &self,
        options: &DiagnosticsOptions,
        env: EnvReport,
        containers: Section<Vec<ContainerInfo>>,
    ) -> DiagnosticsReport {
        let primary_name = options.primary.as_str();

        let primary: Section<Option<ContainerDetail>> = self
            .engine
            .inspect(primary_name)
            .map_err(|e| e.to_string());
        let detail = primary.as_ref().ok().and_then(Option::as_ref);

        let logs = self
            .engine
            .logs(primary_name, options.log_lines)
            .map(|text| LogExcerpt {
                container: primary_name.to_string(),
                text,
            })
            .map_err(|e| e.to_string());

        let networks = self
            .engine
            .list_networks(&options.network_filter)
            .map(|networks| NetworkSection {
                networks,
                addresses: detail
                    .map(|d| {
                        d.networks
                            .iter()
                            .filter(|(_, ip)| !ip.is_empty())
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .map_err(|e| e.to_string());

        let stats = self.engine.stats(primary_name).map_err(|e| e.to_string());

        let running = detail.is_some_and(|d| d.running);
        let summary = Summary {
            service: primary_name.to_string(),
            running,
            restart_count: detail.map(|d| d.restart_count),
            hint: (!running).then(|| format!("docker compose up -d {}", primary_name)),
            finished_at: Local::now(),
        };

        DiagnosticsReport {
            profile: Profile::Debug,
            env_path: options.layout.env_file.clone(),
            env,
            containers,
            primary: Some(primary),
            logs: Some(logs),
            networks: Some(networks),
            stats: Some(stats),
            health: Vec::new(),
            summary,
        }
    }
}
