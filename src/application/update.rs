//! Update Use Case
//!
//! Reinstalls the latest published release of the tool itself.

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink, PackageInstaller};
use crate::error::Tunn8nResult;

/// Name the tool is published under
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

pub struct UpdateUseCase<I: PackageInstaller> {
    installer: I,
}

impl<I: PackageInstaller> UpdateUseCase<I> {
    pub fn new(installer: I) -> Self {
        Self { installer }
    }

    pub fn execute(&self, sink: &dyn LifecycleEventSink) -> Tunn8nResult<()> {
        sink.on_event(LifecycleEvent::Updating {
            command: self.installer.describe(PACKAGE_NAME),
        });
        self.installer.reinstall(PACKAGE_NAME)?;
        sink.on_event(LifecycleEvent::Updated);
        Ok(())
    }
}
