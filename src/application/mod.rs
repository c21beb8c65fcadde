//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CreateProjectUseCase` - Scaffold a project from a template
//! - `StartUseCase` - Precheck, cleanup, repair, launch, post-start snapshot
//! - `StopUseCase` - `compose down` with a single fallback
//! - `DiagnosticsUseCase` - `status` and `debug` reports
//! - `init_env` - Create `.env` from `.env.example`
//! - `UpdateUseCase` - Reinstall the latest release

pub mod create;
pub mod diagnostics;
pub mod env_check;
pub mod init;
pub mod layout;
pub mod preflight;
pub mod start;
pub mod stop;
pub mod update;
#[cfg(test)]
pub(crate) mod testing;

pub use create::{CreateProjectUseCase, CreateResult, DEFAULT_GITIGNORE};
pub use diagnostics::{DiagnosticsOptions, DiagnosticsReport, DiagnosticsUseCase, Profile};
pub use init::{init_env, InitOutcome};
pub use layout::ProjectLayout;
pub use preflight::{detect_compose, ensure_engine_ready, probe_engine, resolve_compose, EngineProbe};
pub use start::{StartOptions, StartOutcome, StartUseCase};
pub use stop::{StopOutcome, StopUseCase};
pub use update::{UpdateUseCase, PACKAGE_NAME};
