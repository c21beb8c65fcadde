//! Property tests for `.env` parsing and validation.

use proptest::prelude::*;

use tunn8n::{validate_env, EnvFile};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,15}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9:/@._-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics and every entry has a key.
    #[test]
    fn property_parse_never_panics(content in ".{0,256}") {
        let env = EnvFile::parse(&content);
        for entry in env.entries() {
            prop_assert!(!entry.key.is_empty());
            prop_assert!(entry.line >= 1);
        }
    }

    /// PROPERTY: `KEY=` is reported as empty and never satisfies a requirement.
    #[test]
    fn property_empty_value_is_flagged(k in key(), line in 1usize..20) {
        let mut content = "\n".repeat(line - 1);
        content.push_str(&format!("{}=\n", k));

        let env = EnvFile::parse(&content);
        let report = validate_env(&env, std::slice::from_ref(&k));

        prop_assert_eq!(report.empty_keys.len(), 1);
        prop_assert_eq!(&report.empty_keys[0].key, &k);
        prop_assert_eq!(report.empty_keys[0].line, line);
        prop_assert_eq!(report.missing_required, vec![k]);
    }

    /// PROPERTY: commented and blank lines never produce entries.
    #[test]
    fn property_comments_are_ignored(k in key(), v in value(), indent in " {0,4}") {
        let content = format!("{indent}# {k}={v}\n\n{indent}\n#{k}=\n");
        let env = EnvFile::parse(&content);
        prop_assert!(env.is_empty());
    }

    /// PROPERTY: lookups see the last definition of a duplicated key.
    #[test]
    fn property_last_duplicate_wins(k in key(), values in proptest::collection::vec(value(), 2..5)) {
        let content: String = values.iter().map(|v| format!("{}={}\n", k, v)).collect();
        let env = EnvFile::parse(&content);

        prop_assert_eq!(env.get(&k), values.last().map(String::as_str));
        prop_assert_eq!(env.duplicate_keys(), vec![k.clone()]);
        prop_assert!(validate_env(&env, &[k]).missing_required.is_empty());
    }

    /// PROPERTY: a non-empty value anywhere satisfies a required key.
    #[test]
    fn property_any_non_empty_occurrence_satisfies(k in key(), v in value(), empty_first in any::<bool>()) {
        let content = if empty_first {
            format!("{k}=\n{k}={v}\n")
        } else {
            format!("{k}={v}\n{k}=\n")
        };
        let env = EnvFile::parse(&content);
        prop_assert!(env.is_satisfied(&k));
    }
}
