//! Init Use Case
//!
//! Creates `.env` from `.env.example`. Running it again is a no-op.

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};
use crate::error::Tunn8nResult;

use super::layout::ProjectLayout;

/// What `init` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// `.env` copied from the example
    Created,
    /// `.env` was already there and was left alone
    AlreadyExists,
    /// No example to copy from
    ExampleMissing,
}

/// Copy the example env file to the env file unless the latter exists
pub fn init_env(layout: &ProjectLayout, sink: &dyn LifecycleEventSink) -> Tunn8nResult<InitOutcome> {
    if layout.env_file.exists() {
        sink.on_event(LifecycleEvent::EnvFileExists {
            path: layout.env_file.clone(),
        });
        return Ok(InitOutcome::AlreadyExists);
    }

    if !layout.env_example.is_file() {
        sink.on_event(LifecycleEvent::EnvExampleMissing {
            path: layout.env_example.clone(),
        });
        return Ok(InitOutcome::ExampleMissing);
    }

    std::fs::copy(&layout.env_example, &layout.env_file)?;
    tracing::debug!(path = %layout.env_file.display(), "env file created");
    sink.on_event(LifecycleEvent::EnvFileCreated {
        path: layout.env_file.clone(),
    });
    Ok(InitOutcome::Created)
}
