//! Container Engine Port
//!
//! Typed access to the container engine. The rest of the crate never sees
//! command lines or text tables; the adapter may still shell out.

use std::path::Path;

use crate::domain::entities::{
    ContainerDetail, ContainerFilter, ContainerInfo, NetworkInfo, ResourceStats,
};
use crate::domain::value_objects::ComposeCommand;
use crate::error::Tunn8nResult;

/// Operations the lifecycle and diagnostics flows need from the engine.
///
/// Implementations:
/// - `DockerCli`: shells out to the `docker` / `docker-compose` binaries
/// - test fakes that record calls and return canned answers
pub trait ContainerEngineClient: Send + Sync {
    /// Engine client version (`docker --version`); proves the CLI is installed
    fn engine_version(&self) -> Tunn8nResult<String>;

    /// Succeeds when the engine daemon answers (`docker info`)
    fn ping(&self) -> Tunn8nResult<()>;

    /// Version of one compose spelling; an error means that spelling is unusable
    fn compose_version(&self, compose: ComposeCommand) -> Tunn8nResult<String>;

    /// Containers whose name matches any of the filter's names
    fn list_containers(&self, filter: &ContainerFilter) -> Tunn8nResult<Vec<ContainerInfo>>;

    /// Inspect one container; `Ok(None)` when it does not exist
    fn inspect(&self, name: &str) -> Tunn8nResult<Option<ContainerDetail>>;

    /// Last `tail` lines of a container's output
    fn logs(&self, name: &str, tail: usize) -> Tunn8nResult<String>;

    /// Networks whose name contains `name_filter`
    fn list_networks(&self, name_filter: &str) -> Tunn8nResult<Vec<NetworkInfo>>;

    /// One-shot resource usage of a container
    fn stats(&self, name: &str) -> Tunn8nResult<ResourceStats>;

    /// Force-remove a container, stopping it first if needed
    fn remove_container(&self, name: &str) -> Tunn8nResult<()>;

    /// Run a compose subcommand in `project_dir` with stdio passed through
    fn compose(&self, compose: ComposeCommand, project_dir: &Path, args: &[&str])
        -> Tunn8nResult<()>;
}
