//! tunn8n - scaffold and manage local n8n stacks
//!
//! tunn8n creates a project directory holding a Docker Compose descriptor for
//! n8n, PostgreSQL and an ngrok tunnel, then starts, stops and diagnoses that
//! stack by driving the Docker CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::EnvFile;
pub use domain::services::{validate_env, EnvReport};
pub use error::{Tunn8nError, Tunn8nResult};
