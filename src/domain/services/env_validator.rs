//! Environment validation
//!
//! Checks a parsed `.env` against the configured list of required keys.

use crate::domain::entities::{EnvEntry, EnvFile};

/// Outcome of validating an environment file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvReport {
    /// False when the file could not be read
    pub file_found: bool,
    /// Keys defined with an empty value, in file order
    pub empty_keys: Vec<EnvEntry>,
    /// Required keys that are absent or only ever empty
    pub missing_required: Vec<String>,
    /// Keys defined on more than one line
    pub duplicate_keys: Vec<String>,
}

impl EnvReport {
    /// Report for a file that does not exist: every required key is missing
    pub fn file_not_found(required: &[String]) -> Self {
        Self {
            file_found: false,
            empty_keys: Vec::new(),
            missing_required: required.to_vec(),
            duplicate_keys: Vec::new(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.file_found && self.missing_required.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.is_satisfied() || !self.empty_keys.is_empty() || !self.duplicate_keys.is_empty()
    }
}

/// Validate `env` against `required`
pub fn validate_env(env: &EnvFile, required: &[String]) -> EnvReport {
    let missing_required = required
        .iter()
        .filter(|key| !env.is_satisfied(key))
        .cloned()
        .collect();

    EnvReport {
        file_found: true,
        empty_keys: env.empty_entries().cloned().collect(),
        missing_required,
        duplicate_keys: env.duplicate_keys(),
    }
}
