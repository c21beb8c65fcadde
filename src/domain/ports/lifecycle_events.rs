//! Lifecycle Event Port
//!
//! Use cases report progress as typed events; the presentation side decides
//! how they look.

use std::path::PathBuf;

use crate::domain::value_objects::ComposeCommand;

/// Event emitted while a lifecycle flow runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Engine daemon answered
    EngineReady,

    /// Validation of the env file began
    ValidatingEnv { path: PathBuf },
    /// The env file does not exist
    EnvFileMissing { path: PathBuf },
    /// A key is defined with no value
    EnvEmptyValue { key: String, line: usize },
    /// A key is defined on more than one line
    EnvDuplicateKey { key: String },
    /// A required key is absent or empty
    EnvRequiredMissing { key: String },
    /// Required keys are missing and the user declined to continue
    Aborted,

    /// Looking for containers left over from a previous run
    CleanupStarted,
    /// Leftover containers found
    ContainersFound { names: Vec<String> },
    ContainerRemoved { name: String },
    ContainerRemovalFailed { name: String, error: String },
    /// Listing containers for cleanup failed
    CleanupFailed { error: String },

    /// Obsolete `version:` removed from the compose descriptor
    DescriptorRepaired { path: PathBuf },
    DescriptorRepairFailed { path: PathBuf, error: String },

    /// Compose `up -d` is about to run
    Launching { compose: ComposeCommand },
    /// Compose `up -d` succeeded
    Launched { url: String },
    /// Heading before a post-start snapshot section
    PostCheckSection { title: String },

    /// Compose `down` is about to run
    Stopping { compose: ComposeCommand },
    /// Primary stop failed; the direct `down` fallback is next
    StopFallback { error: String },
    /// Services are down
    Stopped { via_fallback: bool },

    /// Project directory created
    DirectoryCreated { path: PathBuf },
    /// A top-level template entry was copied
    EntryCopied { name: String },
    /// The default ignore file was written
    IgnoreFileWritten,
    /// The template already shipped an ignore file
    IgnoreFileExists,
    /// `.env` created from `.env.example`
    EnvFileCreated { path: PathBuf },
    /// `.env` already present; nothing to do
    EnvFileExists { path: PathBuf },
    /// No `.env.example` to create `.env` from
    EnvExampleMissing { path: PathBuf },

    /// Reinstall is about to run
    Updating { command: String },
    /// Reinstall finished
    Updated,
}

/// Trait for receiving lifecycle events
///
/// Implementations can be:
/// - ConsoleEventSink: styled terminal output
/// - NoopEventSink: silent operation
pub trait LifecycleEventSink {
    fn on_event(&self, event: LifecycleEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LifecycleEventSink for NoopEventSink {
    fn on_event(&self, _event: LifecycleEvent) {}
}
