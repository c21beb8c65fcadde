//! Domain Services
//!
//! Stateless logic over domain entities.

mod compose_repair;
mod env_validator;

pub use compose_repair::{has_top_level_version, strip_obsolete_version, VersionNotRemovable};
pub use env_validator::{validate_env, EnvReport};
