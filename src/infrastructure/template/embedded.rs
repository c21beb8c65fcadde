//! Template compiled into the binary

use std::path::Path;

use super::write_entry;
use crate::domain::ports::TemplateSource;
use crate::error::Tunn8nResult;

/// (relative path, content)
const FILES: &[(&str, &str)] = &[
    (
        "docker-compose.yml",
        include_str!("../../../templates/docker-compose.yml"),
    ),
    (".env.example", include_str!("../../../templates/.env.example")),
    ("README.md", include_str!("../../../templates/README.md")),
    (
        "scripts/start.sh",
        include_str!("../../../templates/scripts/start.sh"),
    ),
    (
        "scripts/stop.sh",
        include_str!("../../../templates/scripts/stop.sh"),
    ),
    (
        "scripts/status.sh",
        include_str!("../../../templates/scripts/status.sh"),
    ),
    (
        "scripts/debug.sh",
        include_str!("../../../templates/scripts/debug.sh"),
    ),
];

/// The n8n + PostgreSQL + ngrok project shipped with tunn8n
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplate;

impl EmbeddedTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Content of one bundled file
    pub fn file(path: &str) -> Option<&'static str> {
        FILES.iter().find(|(p, _)| *p == path).map(|(_, c)| *c)
    }
}

impl TemplateSource for EmbeddedTemplate {
    fn describe(&self) -> String {
        "built-in template".to_string()
    }

    fn check(&self) -> Tunn8nResult<()> {
        Ok(())
    }

    fn materialize(&self, dest: &Path) -> Tunn8nResult<Vec<String>> {
        let mut created: Vec<String> = Vec::new();
        for (rel, content) in FILES {
            write_entry(&dest.join(rel), content.as_bytes())?;

            let top = rel.split('/').next().unwrap_or(rel).to_string();
            if !created.contains(&top) {
                created.push(top);
            }
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::has_top_level_version;

    #[test]
    fn bundled_compose_file_has_no_obsolete_version() {
        let compose = EmbeddedTemplate::file("docker-compose.yml").unwrap();
        assert!(!has_top_level_version(compose));
        assert!(compose.contains("container_name: n8n-app"));
    }

    #[test]
    fn bundled_env_example_lists_required_keys() {
        let example = EmbeddedTemplate::file(".env.example").unwrap();
        assert!(example.contains("NGROK_AUTHTOKEN="));
        assert!(example.contains("N8N_PORT=5678"));
    }

    #[test]
    fn materialize_reports_top_level_entries() {
        let dir = tempfile::tempdir().unwrap();
        let created = EmbeddedTemplate.materialize(dir.path()).unwrap();

        assert_eq!(
            created,
            vec!["docker-compose.yml", ".env.example", "README.md", "scripts"]
        );
        assert!(dir.path().join("scripts/start.sh").is_file());
        assert!(dir.path().join("scripts/debug.sh").is_file());
    }
}
