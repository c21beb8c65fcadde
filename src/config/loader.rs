//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Tunn8nError, Tunn8nResult};

use super::types::{ColorMode, Config};
use super::ConfigWarning;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "tunn8n.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Tunn8nResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| Tunn8nError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first file found wins; environment overrides apply on top. A file
/// that fails to parse is reported and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs::config_dir() {
        candidates.push(user_config_dir.join("tunn8n/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                return (with_env_overrides(config, env_var), warnings);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring config"),
        }
    }

    (with_env_overrides(Config::default(), env_var), Vec::new())
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable overrides (TUNN8N_* prefix), reading
/// variables through `lookup`
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // TUNN8N_ENGINE_BIN
    if let Some(bin) = lookup("TUNN8N_ENGINE_BIN").filter(|v| !v.trim().is_empty()) {
        config.engine.binary = bin.trim().to_string();
    }

    // TUNN8N_TEMPLATE_DIR
    if let Some(dir) = lookup("TUNN8N_TEMPLATE_DIR").filter(|v| !v.trim().is_empty()) {
        config.template.dir = Some(PathBuf::from(dir));
    }

    // TUNN8N_REQUIRED_KEYS (comma-separated; empty means no required keys)
    if let Some(keys) = lookup("TUNN8N_REQUIRED_KEYS") {
        config.env.required = keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
    }

    // TUNN8N_POST_START_DELAY (seconds)
    if let Some(delay) = lookup("TUNN8N_POST_START_DELAY") {
        match delay.trim().parse::<u64>() {
            Ok(secs) => config.diagnostics.post_start_delay_secs = secs,
            Err(_) => tracing::warn!(value = %delay, "TUNN8N_POST_START_DELAY is not a number"),
        }
    }

    // NO_COLOR is handled by terminal detection; this only forces a mode
    if let Some(color) = lookup("TUNN8N_COLOR") {
        match color.trim().to_lowercase().as_str() {
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            "auto" => config.output.color = ColorMode::Auto,
            _ => tracing::warn!(value = %color, "TUNN8N_COLOR must be auto, always or never"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "compose_file",
        "env_file",
        "env_example",
        "env",
        "required",
        "containers",
        "cleanup_filters",
        "status_filter",
        "primary",
        "network_filter",
        "diagnostics",
        "post_start_delay_secs",
        "start_log_lines",
        "status_log_lines",
        "debug_log_lines",
        "health_path",
        "n8n_port",
        "engine",
        "binary",
        "template",
        "dir",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
