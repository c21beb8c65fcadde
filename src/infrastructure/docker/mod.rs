//! Docker engine adapter

mod cli;
pub mod format;

pub use cli::{DockerCli, DEFAULT_ENGINE_BIN};
