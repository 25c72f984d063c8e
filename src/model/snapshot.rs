//! Dependency-graph snapshot payload.
//!
//! Aggregates manifests for one submission and serializes to the
//! dependency-submission wire format: manifests are keyed by file name, and
//! each resolved dependency carries its purl and direct/indirect relationship.

use crate::model::manifest::{DependencyScope, Manifest};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Job correlation metadata, supplied externally.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Correlator grouping snapshots from the same workflow
    pub correlator: String,
    /// Run identifier
    pub id: String,
}

/// The tool that produced the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Detector {
    pub name: String,
    pub version: String,
    pub url: String,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            url: "https://github.com/spdx-snapshot/spdx-snapshot".to_string(),
        }
    }
}

/// One snapshot submission: all manifests from one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Snapshot schema version expected by the ingestion endpoint
    pub version: u64,
    pub job: Job,
    /// Commit the snapshot describes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Git ref the snapshot describes
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    pub detector: Detector,
    /// When the conversion ran
    pub scanned: DateTime<Utc>,
    /// Manifests keyed by source file name
    #[serde(serialize_with = "serialize_manifests")]
    pub manifests: IndexMap<String, Manifest>,
}

impl Snapshot {
    /// Create an empty snapshot for a job.
    pub fn new(job: Job) -> Self {
        Self {
            version: 0,
            job,
            sha: None,
            git_ref: None,
            detector: Detector::default(),
            scanned: Utc::now(),
            manifests: IndexMap::new(),
        }
    }

    /// Attach commit metadata.
    #[must_use]
    pub fn with_commit(mut self, sha: impl Into<String>, git_ref: impl Into<String>) -> Self {
        self.sha = Some(sha.into());
        self.git_ref = Some(git_ref.into());
        self
    }

    /// Append a manifest, keyed by its file name.
    ///
    /// A later manifest for the same file name replaces the earlier one.
    pub fn add_manifest(&mut self, manifest: Manifest) {
        self.manifests.insert(manifest.file_name.clone(), manifest);
    }

    /// Number of manifests attached.
    pub fn manifest_count(&self) -> usize {
        self.manifests.len()
    }
}

/// Wire shape for one manifest entry.
#[derive(Serialize)]
struct ManifestPayload<'a> {
    name: &'a str,
    file: FileLocation<'a>,
    resolved: IndexMap<&'a str, ResolvedDependency<'a>>,
}

#[derive(Serialize)]
struct FileLocation<'a> {
    source_location: &'a str,
}

#[derive(Serialize)]
struct ResolvedDependency<'a> {
    package_url: &'a str,
    relationship: DependencyScope,
}

fn serialize_manifests<S: Serializer>(
    manifests: &IndexMap<String, Manifest>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let payload: IndexMap<&str, ManifestPayload<'_>> = manifests
        .iter()
        .map(|(file_name, manifest)| {
            let mut resolved = IndexMap::new();
            for package in &manifest.direct_dependencies {
                resolved.insert(
                    package.purl(),
                    ResolvedDependency {
                        package_url: package.purl(),
                        relationship: DependencyScope::Direct,
                    },
                );
            }
            for package in &manifest.indirect_dependencies {
                resolved.insert(
                    package.purl(),
                    ResolvedDependency {
                        package_url: package.purl(),
                        relationship: DependencyScope::Indirect,
                    },
                );
            }
            (
                file_name.as_str(),
                ManifestPayload {
                    name: &manifest.name,
                    file: FileLocation {
                        source_location: &manifest.file_name,
                    },
                    resolved,
                },
            )
        })
        .collect();

    payload.serialize(serializer)
}
