//! Infrastructure implementations for TemplateSource
//!
//! - `EmbeddedTemplate`: project files compiled into the binary (default)
//! - `DirTemplate`: a template directory on disk

mod dir;
mod embedded;

pub use dir::DirTemplate;
pub use embedded::EmbeddedTemplate;

use std::path::Path;

use crate::error::Tunn8nResult;

/// Shell scripts: `.sh` files or anything starting with a shebang
pub(crate) fn is_script(path: &Path, content: &[u8]) -> bool {
    path.extension().is_some_and(|ext| ext == "sh") || content.starts_with(b"#!")
}

/// Write `content` to `path`, marking scripts executable on Unix
pub(crate) fn write_entry(path: &Path, content: &[u8]) -> Tunn8nResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    #[cfg(unix)]
    if is_script(path, content) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}
