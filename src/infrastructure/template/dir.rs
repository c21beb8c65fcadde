//! Template read from a directory on disk

use std::fs;
use std::path::{Path, PathBuf};

use super::write_entry;
use crate::domain::ports::TemplateSource;
use crate::error::{Tunn8nError, Tunn8nResult};

/// Copies every entry under `root`, recursively
#[derive(Debug, Clone)]
pub struct DirTemplate {
    root: PathBuf,
}

impl DirTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirTemplate {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn check(&self) -> Tunn8nResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(Tunn8nError::TemplateMissing {
                path: self.root.clone(),
            })
        }
    }

    fn materialize(&self, dest: &Path) -> Tunn8nResult<Vec<String>> {
        self.check()?;

        let mut created = Vec::new();
        for entry in sorted_entries(&self.root)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if copy_recursive(&entry.path(), &dest.join(&name))? {
                created.push(name);
            }
        }
        Ok(created)
    }
}

fn sorted_entries(dir: &Path) -> Tunn8nResult<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

/// Copy `src` into `dest`; returns false when `src` was skipped.
///
/// Symlinked files are copied by content. Symlinked directories are never
/// followed, so a link loop in the template cannot recurse forever.
fn copy_recursive(src: &Path, dest: &Path) -> Tunn8nResult<bool> {
    let meta = fs::symlink_metadata(src)?;
    if meta.file_type().is_symlink() {
        if src.is_file() {
            write_entry(dest, &fs::read(src)?)?;
            return Ok(true);
        }
        tracing::warn!(path = %src.display(), "skipping symlink that is not a file");
        return Ok(false);
    }

    if meta.is_dir() {
        fs::create_dir_all(dest)?;
        for entry in sorted_entries(src)? {
            copy_recursive(&entry.path(), &dest.join(entry.file_name()))?;
        }
        Ok(true)
    } else {
        let content = fs::read(src)?;
        write_entry(dest, &content)?;
        Ok(true)
    }
}
