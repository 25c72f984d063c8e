//! Manifest construction from a parsed SPDX document.

use crate::convert::{classify, resolve_purl};
use crate::model::{Manifest, Package, SpdxDocument};

/// Build one manifest from one parsed document.
///
/// Walks the package list in document order; every package yields exactly one
/// purl and lands in exactly one of the two dependency sets. A document
/// without packages produces a manifest with two empty sets, not an error.
/// Pure with respect to its inputs.
pub fn build_manifest(document: &SpdxDocument, file_name: &str) -> Manifest {
    let mut manifest = Manifest::new(document.name.clone(), file_name);
    let relationships = document.relationships();

    tracing::debug!(
        file = file_name,
        packages = document.packages().len(),
        "building manifest"
    );

    for pkg in document.packages() {
        let purl = resolve_purl(pkg);
        let scope = classify(pkg, relationships);
        manifest.add_dependency(Package::new(purl), scope);
    }

    manifest
}
