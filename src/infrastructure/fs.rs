//! Local file helpers

use std::io::Write;
use std::path::Path;

use crate::error::Tunn8nResult;

/// Replace `path` with `content` via a temp file in the same directory.
///
/// Readers see either the old or the new file, never a partial write. The
/// original file's permissions are kept.
pub fn write_atomic(path: &Path, content: &str) -> Tunn8nResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(meta) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
