//! Domain Layer
//!
//! Pure logic for tunn8n, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Env files and container state
//! - `value_objects/` - Compose spelling, output levels, config warnings
//! - `services/` - Env validation, compose descriptor repair
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! All process and file system access goes through `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
