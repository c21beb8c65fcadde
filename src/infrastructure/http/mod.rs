//! HTTP adapters

mod health;

pub use health::HttpHealthCheck;
