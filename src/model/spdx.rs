//! SPDX JSON input model.
//!
//! Deserialization targets for SPDX 2.2/2.3 JSON documents, limited to the
//! fields the conversion needs. Everything beyond `name`, `packages` and
//! `relationships` is tolerated and ignored; `packages` and `relationships`
//! themselves are optional because real-world generators omit them.

use serde::Deserialize;

/// A parsed SPDX document.
///
/// Immutable once parsed; one conversion pass owns it exclusively.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    /// Document name (`name` at the document level)
    #[serde(default)]
    pub name: String,
    /// Package list, in document order
    pub packages: Option<Vec<SpdxPackage>>,
    /// Relationship list, in document order
    pub relationships: Option<Vec<SpdxRelationship>>,
}

/// One entry in a document's package list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    /// Unique element identifier within the document
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    /// Package name
    #[serde(default)]
    pub name: String,
    /// Package version. SPDX 2.x emitters write `versionInfo`; some SBOM
    /// generators emit `packageVersion` instead, so both are accepted.
    #[serde(alias = "versionInfo")]
    pub package_version: Option<String>,
    /// Native purl field (SPDX 2.3)
    pub purl: Option<String>,
    /// External references, searched for a legacy purl locator
    pub external_refs: Option<Vec<SpdxExternalRef>>,
}

/// An external reference attached to a package.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxExternalRef {
    #[serde(default)]
    pub reference_category: String,
    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_locator: String,
}

/// A relationship edge between two SPDX elements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxRelationship {
    #[serde(default)]
    pub spdx_element_id: String,
    #[serde(default)]
    pub related_spdx_element: String,
    #[serde(default)]
    pub relationship_type: String,
}

impl SpdxDocument {
    /// Packages in document order, empty when the field is absent.
    pub fn packages(&self) -> &[SpdxPackage] {
        self.packages.as_deref().unwrap_or_default()
    }

    /// Relationships in document order, empty when the field is absent.
    pub fn relationships(&self) -> &[SpdxRelationship] {
        self.relationships.as_deref().unwrap_or_default()
    }
}
