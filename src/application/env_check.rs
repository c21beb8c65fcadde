//! Reading and reporting the project's `.env`

use std::path::Path;

use crate::domain::entities::EnvFile;
use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};
use crate::domain::services::{validate_env, EnvReport};

/// Read `path` and validate it against `required`. A missing or unreadable
/// file yields a not-found report rather than an error.
pub fn read_env_report(path: &Path, required: &[String]) -> EnvReport {
    match std::fs::read_to_string(path) {
        Ok(content) => validate_env(&EnvFile::parse(&content), required),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "env file not read");
            EnvReport::file_not_found(required)
        }
    }
}

/// Emit one event per finding in `report`
pub fn emit_env_report(report: &EnvReport, path: &Path, sink: &dyn LifecycleEventSink) {
    if !report.file_found {
        sink.on_event(LifecycleEvent::EnvFileMissing {
            path: path.to_path_buf(),
        });
    }
    for entry in &report.empty_keys {
        sink.on_event(LifecycleEvent::EnvEmptyValue {
            key: entry.key.clone(),
            line: entry.line,
        });
    }
    for key in &report.duplicate_keys {
        sink.on_event(LifecycleEvent::EnvDuplicateKey { key: key.clone() });
    }
    for key in &report.missing_required {
        sink.on_event(LifecycleEvent::EnvRequiredMissing { key: key.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::lifecycle_events::testing::RecordingEventSink;
    use tempfile::tempdir;

    fn required() -> Vec<String> {
        vec!["NGROK_AUTHTOKEN".to_string(), "N8N_PORT".to_string()]
    }

    #[test]
    fn missing_file_reports_all_required_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        let report = read_env_report(&path, &required());

        assert!(!report.file_found);
        assert_eq!(report.missing_required, required());

        let sink = RecordingEventSink::new();
        emit_env_report(&report, &path, &sink);
        assert_eq!(
            sink.events()[0],
            LifecycleEvent::EnvFileMissing { path: path.clone() }
        );
        assert_eq!(sink.events().len(), 3);
    }

    #[test]
    fn empty_value_emits_line_number_and_missing_required() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "# ngrok\nNGROK_AUTHTOKEN=\nN8N_PORT=5678\n").unwrap();

        let report = read_env_report(&path, &required());
        let sink = RecordingEventSink::new();
        emit_env_report(&report, &path, &sink);

        assert_eq!(
            sink.events(),
            vec![
                LifecycleEvent::EnvEmptyValue {
                    key: "NGROK_AUTHTOKEN".to_string(),
                    line: 2
                },
                LifecycleEvent::EnvRequiredMissing {
                    key: "NGROK_AUTHTOKEN".to_string()
                },
            ]
        );
    }

    #[test]
    fn satisfied_file_emits_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NGROK_AUTHTOKEN=tok\nN8N_PORT=5678\n").unwrap();

        let report = read_env_report(&path, &required());
        let sink = RecordingEventSink::new();
        emit_env_report(&report, &path, &sink);

        assert!(report.is_satisfied());
        assert!(sink.events().is_empty());
    }
}
