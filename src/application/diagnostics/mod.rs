//! Diagnostics use case
//!
//! One reporter, two profiles: `status` (short) and `debug` (full).

mod options;
mod report;
mod use_case;

pub use options::{DiagnosticsOptions, Profile};
pub use report::{
    DiagnosticsReport, HealthProbe, LogExcerpt, NetworkSection, Section, Summary,
};
pub use use_case::DiagnosticsUseCase;
