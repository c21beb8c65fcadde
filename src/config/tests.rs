//! Tests for the config module

use super::loader::with_env_overrides;
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn overrides(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    with_env_overrides(Config::default(), |key| map.get(key).cloned())
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.project.compose_file, "docker-compose.yml");
    assert_eq!(config.project.env_file, ".env");
    assert_eq!(config.env.required, vec!["NGROK_AUTHTOKEN", "N8N_PORT"]);
    assert_eq!(config.containers.cleanup_filters, vec!["n8n", "postgres", "ngrok"]);
    assert_eq!(config.containers.primary, "n8n-app");
    assert_eq!(config.diagnostics.post_start_delay(), Duration::from_secs(3));
    assert_eq!(config.diagnostics.debug_log_lines, 10);
    assert_eq!(config.engine.binary, "docker");
    assert!(config.template.dir.is_none());
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_partial_toml_keeps_defaults() {
    let toml = r#"
[env]
required = ["NGROK_AUTHTOKEN", "N8N_PORT", "N8N_PROTOCOL"]

[diagnostics]
post_start_delay_secs = 10
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.env.required.len(), 3);
    assert_eq!(config.diagnostics.post_start_delay_secs, 10);
    assert_eq!(config.diagnostics.start_log_lines, 5);
    assert_eq!(config.containers.status_filter, "n8n");
}

#[test]
fn test_config_parse_output_color() {
    let config: Config = toml::from_str("[output]\ncolor = \"never\"\n").unwrap();
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_paths_are_joined_to_project_dir() {
    let config = Config::default();
    let dir = Path::new("/work/my-flow");
    assert_eq!(config.compose_path(dir), dir.join("docker-compose.yml"));
    assert_eq!(config.env_path(dir), dir.join(".env"));
    assert_eq!(config.env_example_path(dir), dir.join(".env.example"));
}

#[test]
fn test_env_override_engine_and_template() {
    let config = overrides(&[
        ("TUNN8N_ENGINE_BIN", "podman"),
        ("TUNN8N_TEMPLATE_DIR", "/opt/templates/n8n"),
    ]);
    assert_eq!(config.engine.binary, "podman");
    assert_eq!(
        config.template.dir.as_deref(),
        Some(Path::new("/opt/templates/n8n"))
    );
}

#[test]
fn test_env_override_required_keys() {
    let config = overrides(&[("TUNN8N_REQUIRED_KEYS", " NGROK_AUTHTOKEN , ,N8N_PROTOCOL")]);
    assert_eq!(config.env.required, vec!["NGROK_AUTHTOKEN", "N8N_PROTOCOL"]);

    let config = overrides(&[("TUNN8N_REQUIRED_KEYS", "")]);
    assert!(config.env.required.is_empty());
}

#[test]
fn test_env_override_post_start_delay() {
    assert_eq!(
        overrides(&[("TUNN8N_POST_START_DELAY", "0")])
            .diagnostics
            .post_start_delay_secs,
        0
    );
    // Invalid values keep the default
    assert_eq!(
        overrides(&[("TUNN8N_POST_START_DELAY", "soon")])
            .diagnostics
            .post_start_delay_secs,
        3
    );
}

#[test]
fn test_env_override_color() {
    assert_eq!(
        overrides(&[("TUNN8N_COLOR", "Always")]).output.color,
        ColorMode::Always
    );
    assert_eq!(
        overrides(&[("TUNN8N_COLOR", "rainbow")]).output.color,
        ColorMode::Auto
    );
}

#[test]
fn test_blank_engine_bin_is_ignored() {
    assert_eq!(overrides(&[("TUNN8N_ENGINE_BIN", "  ")]).engine.binary, "docker");
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tunn8n.toml");

    fs::write(&path, "[containers]\nprimery = \"n8n-main\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.containers.primary, "n8n-app");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "primery");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("primary".to_string()));
}

#[test]
fn test_config_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tunn8n.toml");
    fs::write(&path, "[diagnostics]\npost_start_delay_secs = \"three\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, crate::error::Tunn8nError::Config { .. }));
}

#[test]
fn test_load_or_default_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tunn8n.toml"),
        "[containers]\nprimary = \"my-n8n\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.containers.primary, "my-n8n");
    assert!(warnings.is_empty());
}

#[test]
fn test_load_or_default_skips_broken_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tunn8n.toml"), "not = [valid").unwrap();

    let (config, _warnings) = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.containers.status_filter, "n8n");
}
