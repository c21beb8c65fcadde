//! Compose descriptor repair
//!
//! Compose v2 warns that the top-level `version` attribute is obsolete. This strips
//! that entry while leaving the rest of the file, comments included, untouched.

use thiserror::Error;

/// A top-level `version` was found but is not written as a removable block
/// (a flow mapping such as `{version: '3', services: {}}`, say).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("top-level 'version' could not be removed automatically; delete it by hand")]
pub struct VersionNotRemovable;

/// Return the repaired descriptor, or `Ok(None)` when no change is needed.
///
/// Only a top-level `version` key is removed; nested keys named `version`
/// (inside a service, say) are left alone. The key may be quoted and its value
/// may sit on the following indented lines.
pub fn strip_obsolete_version(content: &str) -> Result<Option<String>, VersionNotRemovable> {
    if !has_top_level_version(content) {
        return Ok(None);
    }

    let mut out = String::with_capacity(content.len());
    let mut lines = content.split_inclusive('\n').peekable();
    let mut removed = false;
    while let Some(line) = lines.next() {
        if removed {
            out.push_str(line);
            continue;
        }
        match version_entry(line) {
            Some(VersionEntry::Inline) => removed = true,
            Some(VersionEntry::ValueBelow) => {
                removed = true;
                while lines.next_if(|next| is_continuation(next)).is_some() {}
            }
            None => out.push_str(line),
        }
    }

    if !removed || has_top_level_version(&out) {
        return Err(VersionNotRemovable);
    }
    Ok(Some(out))
}

/// True when the YAML document has a `version` key at its root
pub fn has_top_level_version(content: &str) -> bool {
    match serde_yaml_ng::from_str::<serde_yaml_ng::Value>(content) {
        Ok(serde_yaml_ng::Value::Mapping(map)) => map.contains_key("version"),
        Ok(_) => false,
        // Unparseable descriptors are left for compose to report.
        Err(_) => content.lines().any(|line| version_entry(line).is_some()),
    }
}

enum VersionEntry {
    /// `version: "3.8"`
    Inline,
    /// `version:` with the scalar on the next indented line(s)
    ValueBelow,
}

fn version_entry(line: &str) -> Option<VersionEntry> {
    let rest = ["version", "\"version\"", "'version'"]
        .iter()
        .find_map(|key| line.strip_prefix(key))?;
    let rest = rest.trim_start_matches([' ', '\t']).strip_prefix(':')?;

    let value = rest.split(" #").next().unwrap_or_default().trim();
    if value.is_empty() {
        Some(VersionEntry::ValueBelow)
    } else {
        Some(VersionEntry::Inline)
    }
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_VERSION: &str = "version: \"3.8\"\n\nservices:\n  n8n-app:\n    image: n8nio/n8n\n";

    fn repaired(content: &str) -> String {
        strip_obsolete_version(content).unwrap().unwrap()
    }

    #[test]
    fn strips_quoted_version() {
        assert_eq!(
            repaired(WITH_VERSION),
            "\nservices:\n  n8n-app:\n    image: n8nio/n8n\n"
        );
    }

    #[test]
    fn strips_unquoted_version_without_trailing_newline() {
        assert_eq!(repaired("services: {}\nversion: 3"), "services: {}\n");
    }

    #[test]
    fn strips_value_on_next_line() {
        assert_eq!(
            repaired("version:\n  \"3.8\"\nservices: {}\n"),
            "services: {}\n"
        );
    }

    #[test]
    fn strips_quoted_key() {
        assert_eq!(repaired("\"version\": \"3.8\"\nservices: {}\n"), "services: {}\n");
        assert_eq!(repaired("'version' : 3\nservices: {}\n"), "services: {}\n");
    }

    #[test]
    fn strips_version_with_trailing_comment() {
        assert_eq!(
            repaired("version: '3' # legacy\nservices: {}\n"),
            "services: {}\n"
        );
    }

    #[test]
    fn leaves_nested_version_alone() {
        let content = "services:\n  app:\n    labels:\n      version: \"2\"\n";
        assert_eq!(strip_obsolete_version(content), Ok(None));
    }

    #[test]
    fn does_not_match_longer_keys() {
        let content = "versions: [1]\nservices: {}\n";
        assert_eq!(strip_obsolete_version(content), Ok(None));
    }

    #[test]
    fn no_change_without_version() {
        assert_eq!(
            strip_obsolete_version("services:\n  db:\n    image: postgres\n"),
            Ok(None)
        );
    }

    #[test]
    fn flow_mapping_is_reported_as_not_removable() {
        let content = "{version: '3', services: {}}\n";
        assert!(has_top_level_version(content));
        assert_eq!(strip_obsolete_version(content), Err(VersionNotRemovable));
    }

    #[test]
    fn keeps_comments() {
        let content = "# n8n stack\nversion: '3'\nservices: {}\n";
        assert_eq!(repaired(content), "# n8n stack\nservices: {}\n");
    }
}
