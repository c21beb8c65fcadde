//! Stop Use Case
//!
//! `compose down` in the project directory. If that fails for any reason
//! (no descriptor, no compose, non-zero exit) one direct `down` is tried with
//! whichever compose spelling answers; there is no further retry.

use crate::domain::ports::{ContainerEngineClient, LifecycleEvent, LifecycleEventSink};
use crate::domain::value_objects::ComposeCommand;
use crate::error::{Tunn8nError, Tunn8nResult};

use super::layout::ProjectLayout;
use super::preflight::resolve_compose;

/// How the services were stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    pub compose: ComposeCommand,
    pub via_fallback: bool,
}

pub struct StopUseCase<E: ContainerEngineClient> {
    engine: E,
}

impl<E: ContainerEngineClient> StopUseCase<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn execute(
        &self,
        layout: &ProjectLayout,
        sink: &dyn LifecycleEventSink,
    ) -> Tunn8nResult<StopOutcome> {
        match self.stop(layout, sink) {
            Ok(compose) => {
                sink.on_event(LifecycleEvent::Stopped {
                    via_fallback: false,
                });
                Ok(StopOutcome {
                    compose,
                    via_fallback: false,
                })
            }
            Err(e) => {
                sink.on_event(LifecycleEvent::StopFallback {
                    error: e.to_string(),
                });
                let compose = self.fallback_compose();
                self.engine.compose(compose, &layout.dir, &["down"])?;
                sink.on_event(LifecycleEvent::Stopped { via_fallback: true });
                Ok(StopOutcome {
                    compose,
                    via_fallback: true,
                })
            }
        }
    }

    fn stop(&self, layout: &ProjectLayout, sink: &dyn LifecycleEventSink) -> Tunn8nResult<ComposeCommand> {
        if !layout.compose_file.is_file() {
            return Err(Tunn8nError::DescriptorMissing {
                path: layout.compose_file.clone(),
            });
        }
        let compose = resolve_compose(&self.engine)?;
        sink.on_event(LifecycleEvent::Stopping { compose });
        self.engine.compose(compose, &layout.dir, &["down"])?;
        Ok(compose)
    }

    /// Standalone when its probe answers, the plugin otherwise
    fn fallback_compose(&self) -> ComposeCommand {
        match self.engine.compose_version(ComposeCommand::Standalone) {
            Ok(_) => ComposeCommand::Standalone,
            Err(_) => ComposeCommand::Plugin,
        }
    }
}
