//! Common test utilities for tunn8n CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI runners
//! - `fake_docker`: a scripted stand-in for the Docker CLI (unix only)

pub mod env;

pub use env::*;
