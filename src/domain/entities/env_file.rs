//! Environment file entity
//!
//! A `.env` file is an ordered list of `KEY=value` lines. Blank lines, lines whose
//! trimmed form starts with `#`, and lines without `=` carry no entry.

/// A single `KEY=value` definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source file
    pub line: usize,
}

impl EnvEntry {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Parsed environment file.
///
/// Duplicate keys are preserved in order. [`EnvFile::get`] returns the last
/// occurrence; [`EnvFile::is_satisfied`] accepts any non-empty occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<EnvEntry>,
}

impl EnvFile {
    /// Parse file content
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parse_line(line, idx + 1))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the last definition of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// True when `key` has a non-empty value on at least one line
    pub fn is_satisfied(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key && !e.is_empty())
    }

    /// Entries defined with an empty value, in file order
    pub fn empty_entries(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter().filter(|e| e.is_empty())
    }

    /// Keys defined more than once, in order of first appearance
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::new();
        let mut dups: Vec<String> = Vec::new();
        for entry in &self.entries {
            if seen.contains(&entry.key.as_str()) {
                if !dups.contains(&entry.key) {
                    dups.push(entry.key.clone());
                }
            } else {
                seen.push(&entry.key);
            }
        }
        dups
    }
}

fn parse_line(line: &str, line_no: usize) -> Option<EnvEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some(EnvEntry {
        key: key.to_string(),
        value: value.trim().to_string(),
        line: line_no,
    })
}
