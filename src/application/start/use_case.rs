//! Start Use Case
//!
//! Orchestrates the start flow:
//! 1. Precheck: compose descriptor present, engine reachable, `.env` validated
//! 2. Confirm: only when required keys are missing
//! 3. Cleanup: force-remove leftover containers
//! 4. Repair: drop an obsolete top-level `version:` from the descriptor
//! 5. Launch: `compose up -d`
//! 6. Postcheck: after a fixed delay, `compose ps` and recent logs
//!
//! The post-start delay is not a readiness check; services may still be
//! booting when the snapshot is taken.

use std::thread;

use crate::domain::entities::{ContainerFilter, EnvFile};
use crate::domain::ports::{Confirmer, ContainerEngineClient, LifecycleEvent, LifecycleEventSink};
use crate::domain::services::strip_obsolete_version;
use crate::domain::value_objects::ComposeCommand;
use crate::error::{Tunn8nError, Tunn8nResult};
use crate::infrastructure::fs::write_atomic;

use super::super::env_check::{emit_env_report, read_env_report};
use super::super::preflight::{ensure_engine_ready, resolve_compose};
use super::options::StartOptions;

/// Prompt shown when required keys are missing
pub const CONTINUE_PROMPT: &str = "Required environment variables are missing. Continue anyway?";

/// How a start attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started { compose: ComposeCommand, url: String },
    /// The user declined to continue; nothing was changed
    Aborted,
}

/// Start use case - brings the stack up from a clean slate
pub struct StartUseCase<E: ContainerEngineClient> {
    engine: E,
}

impl<E: ContainerEngineClient> StartUseCase<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn execute(
        &self,
        options: &StartOptions,
        confirmer: &dyn Confirmer,
        sink: &dyn LifecycleEventSink,
    ) -> Tunn8nResult<StartOutcome> {
        let layout = &options.layout;

        // Precheck
        if !layout.compose_file.is_file() {
            return Err(Tunn8nError::DescriptorMissing {
                path: layout.compose_file.clone(),
            });
        }
        ensure_engine_ready(&self.engine)?;
        sink.on_event(LifecycleEvent::EngineReady);

        sink.on_event(LifecycleEvent::ValidatingEnv {
            path: layout.env_file.clone(),
        });
        let report = read_env_report(&layout.env_file, &options.required_keys);
        emit_env_report(&report, &layout.env_file, sink);

        // Confirm
        if !report.is_satisfied() && !confirmer.confirm(CONTINUE_PROMPT) {
            sink.on_event(LifecycleEvent::Aborted);
            return Ok(StartOutcome::Aborted);
        }

        self.cleanup(&options.cleanup_filters, sink);
        self.repair(options, sink);

        // Launch
        let compose = resolve_compose(&self.engine)?;
        sink.on_event(LifecycleEvent::Launching { compose });
        self.engine.compose(compose, &layout.dir, &["up", "-d"])?;

        let url = format!("http://localhost:{}", self.local_port(options));
        sink.on_event(LifecycleEvent::Launched { url: url.clone() });

        self.post_check(compose, options, sink);

        Ok(StartOutcome::Started { compose, url })
    }

    /// Remove every container matching a cleanup filter. Failures are
    /// reported and do not stop the remaining removals.
    fn cleanup(&self, filters: &[String], sink: &dyn LifecycleEventSink) {
        sink.on_event(LifecycleEvent::CleanupStarted);

        let filter = ContainerFilter::names(filters.iter().cloned()).include_stopped();
        let containers = match self.engine.list_containers(&filter) {
            Ok(containers) => containers,
            Err(e) => {
                sink.on_event(LifecycleEvent::CleanupFailed {
                    error: e.to_string(),
                });
                return;
            }
        };

        let mut names: Vec<String> = Vec::new();
        for container in containers {
            if !names.contains(&container.name) {
                names.push(container.name);
            }
        }
        if names.is_empty() {
            return;
        }

        sink.on_event(LifecycleEvent::ContainersFound {
            names: names.clone(),
        });
        for name in names {
            match self.engine.remove_container(&name) {
                Ok(()) => sink.on_event(LifecycleEvent::ContainerRemoved { name }),
                Err(e) => sink.on_event(LifecycleEvent::ContainerRemovalFailed {
                    name,
                    error: e.to_string(),
                }),
            }
        }
    }

    fn repair(&self, options: &StartOptions, sink: &dyn LifecycleEventSink) {
        let path = &options.layout.compose_file;
        let result = std::fs::read_to_string(path)
            .map_err(|e| Tunn8nError::from(e).to_string())
            .and_then(|content| strip_obsolete_version(&content).map_err(|e| e.to_string()))
            .and_then(|repaired| match repaired {
                Some(repaired) => write_atomic(path, &repaired)
                    .map(|()| true)
                    .map_err(|e| e.to_string()),
                None => Ok(false),
            });

        match result {
            Ok(true) => sink.on_event(LifecycleEvent::DescriptorRepaired { path: path.clone() }),
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "descriptor repair failed");
                sink.on_event(LifecycleEvent::DescriptorRepairFailed {
                    path: path.clone(),
                    error,
                })
            }
        }
    }

    fn local_port(&self, options: &StartOptions) -> String {
        std::fs::read_to_string(&options.layout.env_file)
            .ok()
            .and_then(|content| {
                EnvFile::parse(&content)
                    .get("N8N_PORT")
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| options.default_port.to_string())
    }

    /// Snapshot after launch; nothing here can fail the start
    fn post_check(&self, compose: ComposeCommand, options: &StartOptions, sink: &dyn LifecycleEventSink) {
        if !options.post_start_delay.is_zero() {
            thread::sleep(options.post_start_delay);
        }

        let dir = &options.layout.dir;
        sink.on_event(LifecycleEvent::PostCheckSection {
            title: "Service status".to_string(),
        });
        if let Err(e) = self.engine.compose(compose, dir, &["ps"]) {
            tracing::warn!(error = %e, "post-start ps failed");
        }

        sink.on_event(LifecycleEvent::PostCheckSection {
            title: "Recent logs".to_string(),
        });
        let tail = format!("--tail={}", options.log_lines);
        if let Err(e) = self.engine.compose(compose, dir, &["logs", tail.as_str()]) {
            tracing::warn!(error = %e, "post-start logs failed");
        }
    }
}
