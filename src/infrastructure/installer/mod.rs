//! Package manager adapters

mod cargo;

pub use cargo::{CargoInstaller, DEFAULT_CARGO_BIN};
