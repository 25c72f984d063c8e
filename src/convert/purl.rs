//! Purl resolution and repair.
//!
//! Derives one canonical, percent-encoded purl string per package. Resolution
//! is a total function: every package yields an identifier, so one malformed
//! record can never abort a document. The repair passes work around known
//! encoding defects in upstream SBOM generators, which under-escape namespace
//! `@` signs or emit `%40` where the name/version separator was intended.

use crate::model::SpdxPackage;

/// External reference category marking a package-manager locator.
const PACKAGE_MANAGER_CATEGORY: &str = "PACKAGE-MANAGER";

/// External reference type carrying a purl.
const PURL_REFERENCE_TYPE: &str = "purl";

/// Resolve the canonical purl for a package.
///
/// Source priority, first match wins:
/// 1. the native `purl` field (SPDX 2.3),
/// 2. a `PACKAGE-MANAGER`/`purl` external reference locator,
/// 3. a synthesized `pkg:generic/<name>@<version>` identifier.
///
/// The chosen identifier then goes through escape repair and version
/// encoding before being returned.
pub fn resolve_purl(pkg: &SpdxPackage) -> String {
    let raw = first_purl_source(pkg);
    encode_version(&replace_version_escape(&raw))
}

/// Pick the starting identifier from the priority chain.
fn first_purl_source(pkg: &SpdxPackage) -> String {
    pkg.purl
        .clone()
        .or_else(|| external_ref_locator(pkg))
        .unwrap_or_else(|| generic_purl(pkg))
}

/// Locate a legacy purl reference among the package's external refs.
fn external_ref_locator(pkg: &SpdxPackage) -> Option<String> {
    pkg.external_refs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|r| {
            r.reference_category == PACKAGE_MANAGER_CATEGORY
                && r.reference_type == PURL_REFERENCE_TYPE
        })
        .map(|r| r.reference_locator.clone())
}

/// Synthesize a generic purl from name and version, verbatim.
///
/// A missing version yields an empty segment; encoding is applied later by
/// the shared pipeline, not at synthesis time.
fn generic_purl(pkg: &SpdxPackage) -> String {
    format!(
        "pkg:generic/{}@{}",
        pkg.name,
        pkg.package_version.as_deref().unwrap_or_default()
    )
}

/// Repair mis-escaped `@` signs in a purl.
///
/// Two defects are handled:
/// - an under-escaped namespace `@` appearing right after a `/` becomes `%40`;
/// - when the string then contains no `@` at all, the last `%40` is assumed
///   to be the intended name/version separator and is turned back into `@`.
///
/// A string that already contains an unescaped `@` is assumed well-formed and
/// the second rewrite is skipped entirely.
pub fn replace_version_escape(purl: &str) -> String {
    let repaired = purl.replace("/@", "/%40");

    if repaired.contains('@') {
        return repaired;
    }

    match repaired.rfind("%40") {
        Some(index) if index > 0 => {
            let mut out = String::with_capacity(repaired.len());
            out.push_str(&repaired[..index]);
            out.push('@');
            out.push_str(&repaired[index + 3..]);
            out
        }
        _ => repaired,
    }
}

/// Percent-encode the version component of a purl.
///
/// The version runs from the last `@` up to the first `?` (qualifiers) or
/// `#` (subpath) delimiter, whichever comes first. Within it, a bare `%` not
/// already starting a valid escape becomes `%25`, `+` becomes `%2B` and
/// space becomes `%20`. Everything outside the version is left untouched.
pub fn encode_version(purl: &str) -> String {
    let Some(at_index) = purl.rfind('@') else {
        return purl.to_string();
    };

    let (before_version, after_at) = purl.split_at(at_index + 1);

    let version_end = match (after_at.find('?'), after_at.find('#')) {
        (Some(q), Some(s)) => q.min(s),
        (Some(q), None) => q,
        (None, Some(s)) => s,
        (None, None) => after_at.len(),
    };
    let (version, suffix) = after_at.split_at(version_end);

    let encoded = escape_bare_percent(version)
        .replace('+', "%2B")
        .replace(' ', "%20");

    format!("{before_version}{encoded}{suffix}")
}

/// Escape every `%` that does not already start a valid two-hex-digit escape.
fn escape_bare_percent(version: &str) -> String {
    let mut out = String::with_capacity(version.len());
    let mut rest = version;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let mut hex = after.chars().take(2);
        let valid_escape = matches!(
            (hex.next(), hex.next()),
            (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
        );
        out.push_str(if valid_escape { "%" } else { "%25" });
        rest = after;
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpdxExternalRef;

    fn package(purl: Option<&str>, refs: Option<Vec<SpdxExternalRef>>) -> SpdxPackage {
        SpdxPackage {
            spdx_id: "SPDXRef-Test".to_string(),
            name: "left-pad".to_string(),
            package_version: Some("1.3.0".to_string()),
            purl: purl.map(str::to_string),
            external_refs: refs,
        }
    }

    fn purl_ref(locator: &str) -> SpdxExternalRef {
        SpdxExternalRef {
            reference_category: "PACKAGE-MANAGER".to_string(),
            reference_type: "purl".to_string(),
            reference_locator: locator.to_string(),
        }
    }

    #[test]
    fn test_native_purl_field_wins() {
        let pkg = package(
            Some("pkg:npm/left-pad@1.3.0"),
            Some(vec![purl_ref("pkg:npm/other@9.9.9")]),
        );
        assert_eq!(resolve_purl(&pkg), "pkg:npm/left-pad@1.3.0");
    }

    #[test]
    fn test_external_ref_fallback() {
        let pkg = package(None, Some(vec![purl_ref("pkg:npm/left-pad@1.3.0")]));
        assert_eq!(resolve_purl(&pkg), "pkg:npm/left-pad@1.3.0");
    }

    #[test]
    fn test_non_matching_external_ref_is_skipped() {
        let other_ref = SpdxExternalRef {
            reference_category: "SECURITY".to_string(),
            reference_type: "cpe23Type".to_string(),
            reference_locator: "cpe:2.3:a:left-pad".to_string(),
        };
        let pkg = package(None, Some(vec![other_ref]));
        assert_eq!(resolve_purl(&pkg), "pkg:generic/left-pad@1.3.0");
    }

    #[test]
    fn test_generic_synthesis() {
        let pkg = package(None, None);
        assert_eq!(resolve_purl(&pkg), "pkg:generic/left-pad@1.3.0");
    }

    #[test]
    fn test_generic_synthesis_without_version() {
        let mut pkg = package(None, None);
        pkg.package_version = None;
        assert_eq!(resolve_purl(&pkg), "pkg:generic/left-pad@");
    }

    #[test]
    fn test_escape_repair_namespace_at() {
        assert_eq!(
            replace_version_escape("pkg:npm/@scope/name@1.0.0"),
            "pkg:npm/%40scope/name@1.0.0"
        );
    }

    #[test]
    fn test_escape_repair_last_escaped_at_becomes_separator() {
        assert_eq!(
            replace_version_escape("org%40scope/pkg%401.0.0"),
            "org%40scope/pkg@1.0.0"
        );
    }

    #[test]
    fn test_escape_repair_suppressed_by_literal_at() {
        assert_eq!(
            replace_version_escape("org%40scope/pkg@1.0.0"),
            "org%40scope/pkg@1.0.0"
        );
    }

    #[test]
    fn test_escape_repair_leading_escape_untouched() {
        // Only positions greater than zero qualify as a separator.
        assert_eq!(replace_version_escape("%40scope"), "%40scope");
    }

    #[test]
    fn test_escape_repair_no_at_passthrough() {
        assert_eq!(replace_version_escape("pkg:npm/lodash"), "pkg:npm/lodash");
    }

    #[test]
    fn test_encode_version_plus() {
        assert_eq!(
            encode_version("pkg:npm/foo@1.0.0+build"),
            "pkg:npm/foo@1.0.0%2Bbuild"
        );
    }

    #[test]
    fn test_encode_version_space() {
        assert_eq!(encode_version("pkg:npm/foo@1.0 0"), "pkg:npm/foo@1.0%200");
    }

    #[test]
    fn test_encode_version_incomplete_escape() {
        // The bare % gets escaped; the trailing 2 no longer pairs with it.
        assert_eq!(encode_version("pkg:npm/foo@1.0%2"), "pkg:npm/foo@1.0%252");
    }

    #[test]
    fn test_encode_version_valid_escape_preserved() {
        assert_eq!(
            encode_version("pkg:npm/foo@1.0%2Bbeta"),
            "pkg:npm/foo@1.0%2Bbeta"
        );
    }

    #[test]
    fn test_encode_version_qualifier_suffix_preserved() {
        assert_eq!(
            encode_version("pkg:npm/ns/foo%40bar@1.0.0?qualifier=x"),
            "pkg:npm/ns/foo%40bar@1.0.0?qualifier=x"
        );
    }

    #[test]
    fn test_encode_version_subpath_before_qualifier() {
        assert_eq!(
            encode_version("pkg:npm/foo@1+1#sub?q=1"),
            "pkg:npm/foo@1%2B1#sub?q=1"
        );
    }

    #[test]
    fn test_encode_version_safe_input_unchanged() {
        assert_eq!(
            encode_version("pkg:npm/foo@1.0.0"),
            "pkg:npm/foo@1.0.0"
        );
    }

    #[test]
    fn test_encode_version_no_at_passthrough() {
        assert_eq!(encode_version("pkg:npm/foo 1+2"), "pkg:npm/foo 1+2");
    }

    #[test]
    fn test_full_pipeline_namespace_without_version() {
        // The /@ rewrite applies even when no version is present; with no
        // other %40 before it, the escaped namespace round-trips back.
        let pkg = package(Some("pkg:npm/@scope/name"), None);
        assert_eq!(resolve_purl(&pkg), "pkg:npm/@scope/name");
    }
}
