//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compose_command;
mod config_warning;
mod level;

pub use compose_command::ComposeCommand;
pub use config_warning::ConfigWarning;
pub use level::Level;
