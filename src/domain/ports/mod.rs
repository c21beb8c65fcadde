//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod container_engine;
pub mod health_check;
pub mod installer;
pub mod lifecycle_events;
pub mod template_source;

pub use confirmer::{is_affirmative, Confirmer, FixedAnswer};
pub use container_engine::ContainerEngineClient;
pub use health_check::{HealthCheck, HealthStatus};
pub use installer::PackageInstaller;
pub use lifecycle_events::{LifecycleEvent, LifecycleEventSink, NoopEventSink};
pub use template_source::TemplateSource;
