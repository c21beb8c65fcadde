//! Domain Entities

mod container;
mod env_file;

pub use container::{
    ContainerDetail, ContainerFilter, ContainerInfo, NetworkInfo, ResourceStats,
};
pub use env_file::{EnvEntry, EnvFile};
