//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `docker`: container engine through the Docker CLI
//! - `confirm`: terminal confirmation prompt
//! - `template`: project template sources
//! - `http`: health probe
//! - `installer`: package manager for `update`
//! - `fs`: local file helpers

pub mod confirm;
pub mod docker;
pub mod fs;
pub mod http;
pub mod installer;
pub mod template;

pub use confirm::InteractiveConfirmer;
pub use docker::DockerCli;
pub use http::HttpHealthCheck;
pub use installer::CargoInstaller;
pub use template::{DirTemplate, EmbeddedTemplate};
