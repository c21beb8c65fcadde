//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line surface
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use tunn8n::presentation::factory;
//!
//! let use_case = factory::create_stop_use_case(&config);
//! let outcome = use_case.execute(&layout, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Action, Cli, ColorWhen, Commands, Parsed, TrailingArgs};
