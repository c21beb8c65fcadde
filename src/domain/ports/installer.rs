//! Package Installer Port

use crate::error::Tunn8nResult;

/// Reinstalls a released package through a package manager
pub trait PackageInstaller {
    /// The command line that `reinstall` runs, for messages
    fn describe(&self, package: &str) -> String;

    fn reinstall(&self, package: &str) -> Tunn8nResult<()>;
}
