//! Engine availability probes

use crate::domain::ports::ContainerEngineClient;
use crate::domain::value_objects::ComposeCommand;
use crate::error::{Tunn8nError, Tunn8nResult};

/// What is installed: the engine CLI and which compose spelling works
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineProbe {
    pub engine_available: bool,
    pub compose: Option<ComposeCommand>,
}

/// Probe the engine CLI and both compose spellings (no daemon contact)
pub fn probe_engine<E: ContainerEngineClient + ?Sized>(engine: &E) -> EngineProbe {
    let engine_available = match engine.engine_version() {
        Ok(version) => {
            tracing::debug!(%version, "engine found");
            true
        }
        Err(e) => {
            tracing::debug!(error = %e, "engine not found");
            false
        }
    };

    EngineProbe {
        engine_available,
        compose: detect_compose(engine),
    }
}

/// First compose spelling whose version probe succeeds
pub fn detect_compose<E: ContainerEngineClient + ?Sized>(engine: &E) -> Option<ComposeCommand> {
    ComposeCommand::PROBE_ORDER.into_iter().find(|compose| {
        match engine.compose_version(*compose) {
            Ok(version) => {
                tracing::debug!(%compose, %version, "compose found");
                true
            }
            Err(e) => {
                tracing::debug!(%compose, error = %e, "compose probe failed");
                false
            }
        }
    })
}

/// Like [`detect_compose`], but missing compose is an error
pub fn resolve_compose<E: ContainerEngineClient + ?Sized>(
    engine: &E,
) -> Tunn8nResult<ComposeCommand> {
    detect_compose(engine).ok_or(Tunn8nError::OrchestratorUnavailable)
}

/// Fails with `EngineUnavailable` unless the engine daemon answers
pub fn ensure_engine_ready<E: ContainerEngineClient + ?Sized>(engine: &E) -> Tunn8nResult<()> {
    engine.ping().map_err(|e| {
        tracing::debug!(error = %e, "engine ping failed");
        Tunn8nError::EngineUnavailable
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeEngine;

    #[test]
    fn standalone_is_preferred_when_both_work() {
        let engine = FakeEngine::new();
        assert_eq!(detect_compose(&engine), Some(ComposeCommand::Standalone));
    }

    #[test]
    fn plugin_is_used_when_standalone_missing() {
        let engine = FakeEngine::new().without_compose(ComposeCommand::Standalone);
        assert_eq!(detect_compose(&engine), Some(ComposeCommand::Plugin));
    }

    #[test]
    fn no_compose_is_orchestrator_unavailable() {
        let engine = FakeEngine::new()
            .without_compose(ComposeCommand::Standalone)
            .without_compose(ComposeCommand::Plugin);
        assert!(matches!(
            resolve_compose(&engine),
            Err(Tunn8nError::OrchestratorUnavailable)
        ));
    }

    #[test]
    fn probe_reports_missing_engine() {
        let engine = FakeEngine::new().without_engine();
        let probe = probe_engine(&engine);
        assert!(!probe.engine_available);
    }

    #[test]
    fn daemon_down_is_engine_unavailable() {
        let engine = FakeEngine::new().daemon_down();
        assert!(matches!(
            ensure_engine_ready(&engine),
            Err(Tunn8nError::EngineUnavailable)
        ));
    }
}
