//! Project file layout

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Where a project's files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub dir: PathBuf,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
    pub env_example: PathBuf,
}

impl ProjectLayout {
    /// Default file names under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::from_config(dir, &Config::default())
    }

    /// File names from configuration, under `dir`
    pub fn from_config(dir: impl Into<PathBuf>, config: &Config) -> Self {
        let dir = dir.into();
        Self {
            compose_file: config.compose_path(&dir),
            env_file: config.env_path(&dir),
            env_example: config.env_example_path(&dir),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let layout = ProjectLayout::new("/work/flows");
        assert_eq!(layout.compose_file, PathBuf::from("/work/flows/docker-compose.yml"));
        assert_eq!(layout.env_file, PathBuf::from("/work/flows/.env"));
        assert_eq!(layout.env_example, PathBuf::from("/work/flows/.env.example"));
    }

    #[test]
    fn layout_follows_configured_names() {
        let mut config = Config::default();
        config.project.compose_file = "compose.yaml".to_string();
        let layout = ProjectLayout::from_config("proj", &config);
        assert_eq!(layout.compose_file, PathBuf::from("proj/compose.yaml"));
    }
}
