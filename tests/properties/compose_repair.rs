//! Property tests for stripping the obsolete compose `version` key.

use proptest::prelude::*;

use tunn8n::domain::services::{has_top_level_version, strip_obsolete_version};

fn version_value() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[23](\\.[0-9])?").unwrap(),
        proptest::string::string_regex("[23](\\.[0-9])?")
            .unwrap()
            .prop_map(|v| format!("\"{}\"", v)),
        proptest::string::string_regex("[23](\\.[0-9])?")
            .unwrap()
            .prop_map(|v| format!("'{}'", v)),
    ]
}

fn services() -> impl Strategy<Value = String> {
    let name = proptest::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap();
    proptest::collection::btree_set(name, 1..4).prop_map(|names| {
        let mut out = String::from("services:\n");
        for name in names {
            out.push_str(&format!("  {}:\n    image: {}\n", name, name));
        }
        out
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: repairing removes the key and a second repair is a no-op.
    #[test]
    fn property_repair_is_idempotent(v in version_value(), body in services()) {
        let content = format!("version: {}\n{}", v, body);

        let repaired = strip_obsolete_version(&content);
        prop_assert_eq!(repaired, Ok(Some(body.clone())));
        prop_assert!(!has_top_level_version(&body));
        prop_assert_eq!(strip_obsolete_version(&body), Ok(None));
    }

    /// PROPERTY: descriptors without a top-level version are never rewritten.
    #[test]
    fn property_no_version_no_change(body in services()) {
        prop_assert_eq!(strip_obsolete_version(&body), Ok(None));
    }

    /// PROPERTY: a value on the line below the key is removed with it.
    #[test]
    fn property_value_below_key_is_removed(v in version_value(), indent in " {1,4}", body in services()) {
        let content = format!("version:\n{}{}\n{}", indent, v, body);
        prop_assert_eq!(strip_obsolete_version(&content), Ok(Some(body)));
    }
}
