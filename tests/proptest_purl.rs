//! Property-based tests for the purl repair and encoding passes.

use proptest::prelude::*;
use spdx_snapshot::convert::{encode_version, replace_version_escape};

proptest! {
    /// The escape repair settles after one application: running it a second
    /// time never changes the result for inputs with no unescaped `@`.
    #[test]
    fn escape_repair_is_idempotent(s in "[a-z0-9/%.:-]{0,40}") {
        let once = replace_version_escape(&s);
        let twice = replace_version_escape(&once);
        prop_assert_eq!(once, twice);
    }

    /// Inputs that already contain an unescaped `@` are assumed well-formed:
    /// only the namespace `/@` rewrite may touch them.
    #[test]
    fn escape_repair_preserves_existing_separator(
        name in "[a-z][a-z0-9-]{0,10}",
        version in "[0-9][0-9a-z.]{0,10}",
    ) {
        let purl = format!("pkg:npm/{name}@{version}");
        prop_assert_eq!(replace_version_escape(&purl), purl);
    }

    /// A version with none of `%`, `+` or space is returned unchanged.
    #[test]
    fn encode_version_is_noop_on_safe_versions(
        name in "[a-z][a-z0-9-]{0,10}",
        version in "[0-9][0-9A-Za-z.-]{0,15}",
    ) {
        let purl = format!("pkg:npm/{name}@{version}");
        prop_assert_eq!(encode_version(&purl), purl);
    }

    /// Encoding never touches anything before the last `@` or after the
    /// first qualifier delimiter.
    #[test]
    fn encode_version_scopes_to_version_segment(
        prefix in "pkg:[a-z]{2,6}/[a-z][a-z0-9-]{0,10}",
        version in "[ +%0-9a-z.]{0,12}",
        qualifier in "[a-z]{1,8}",
    ) {
        let purl = format!("{prefix}@{version}?arch={qualifier}");
        let encoded = encode_version(&purl);
        let expected_prefix = format!("{prefix}@");
        let expected_suffix = format!("?arch={qualifier}");
        prop_assert!(encoded.starts_with(&expected_prefix));
        prop_assert!(encoded.ends_with(&expected_suffix));
    }

    /// The encoded version contains no bare space or plus, and every `%` it
    /// contains starts a valid two-hex-digit escape.
    #[test]
    fn encoded_version_is_fully_escaped(version in "[ +%0-9a-z.]{0,16}") {
        let purl = format!("pkg:npm/foo@{version}");
        let encoded = encode_version(&purl);
        let encoded_version = &encoded["pkg:npm/foo@".len()..];

        prop_assert!(!encoded_version.contains(' '));
        prop_assert!(!encoded_version.contains('+'));

        let bytes = encoded_version.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'%' {
                prop_assert!(
                    i + 2 < bytes.len()
                        && bytes[i + 1].is_ascii_hexdigit()
                        && bytes[i + 2].is_ascii_hexdigit(),
                    "bare % at {} in {:?}",
                    i,
                    encoded_version
                );
            }
        }
    }
}
