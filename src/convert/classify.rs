//! Direct/indirect dependency classification.

use crate::model::{DependencyScope, SpdxPackage, SpdxRelationship};

/// Relationship type declaring a dependency edge.
const DEPENDS_ON: &str = "DEPENDS_ON";

/// SPDX identifier of the conceptual root package.
const ROOT_PACKAGE_ID: &str = "SPDXRef-RootPackage";

/// Classify a package as a direct or indirect dependency of the root.
///
/// A package is indirect when any non-root element declares a `DEPENDS_ON`
/// edge onto it; otherwise it is direct. This is an existence check over the
/// single document's relationship list, not a transitive-closure computation:
/// a package that is both a root dependency and depended on by another
/// package still classifies as indirect. The approximation is kept as-is to
/// match what upstream converters submit.
pub fn classify(pkg: &SpdxPackage, relationships: &[SpdxRelationship]) -> DependencyScope {
    let has_non_root_dependant = relationships.iter().any(|rel| {
        rel.related_spdx_element == pkg.spdx_id
            && rel.relationship_type == DEPENDS_ON
            && rel.spdx_element_id != ROOT_PACKAGE_ID
    });

    if has_non_root_dependant {
        DependencyScope::Indirect
    } else {
        DependencyScope::Direct
    }
}
