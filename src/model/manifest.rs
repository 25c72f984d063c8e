//! Per-file manifest output model.

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// A canonical purl identifying one dependency.
///
/// Value-equality by string; no mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Package(String);

impl Package {
    /// Wrap a resolved purl string.
    pub fn new(purl: impl Into<String>) -> Self {
        Self(purl.into())
    }

    /// The canonical purl string.
    pub fn purl(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Package {
    fn from(purl: String) -> Self {
        Self(purl)
    }
}

/// Whether a package is a direct or transitive dependency of the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Direct,
    Indirect,
}

/// One manifest per input document, grouping its dependencies by scope.
///
/// Dependency sets are insertion-ordered for deterministic output but carry
/// set semantics: inserting the same purl twice is a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Name derived from the source document
    pub name: String,
    /// Path of the file the document was read from
    pub file_name: String,
    /// Packages the root depends on directly
    pub direct_dependencies: IndexSet<Package>,
    /// Packages reached only through other packages
    pub indirect_dependencies: IndexSet<Package>,
}

impl Manifest {
    /// Create an empty manifest for a document.
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            direct_dependencies: IndexSet::new(),
            indirect_dependencies: IndexSet::new(),
        }
    }

    /// Record a direct dependency.
    pub fn add_direct_dependency(&mut self, package: Package) {
        self.direct_dependencies.insert(package);
    }

    /// Record an indirect dependency.
    pub fn add_indirect_dependency(&mut self, package: Package) {
        self.indirect_dependencies.insert(package);
    }

    /// Insert a package under the given scope.
    pub fn add_dependency(&mut self, package: Package, scope: DependencyScope) {
        match scope {
            DependencyScope::Direct => self.add_direct_dependency(package),
            DependencyScope::Indirect => self.add_indirect_dependency(package),
        }
    }

    /// Total number of dependencies across both scopes.
    pub fn dependency_count(&self) -> usize {
        self.direct_dependencies.len() + self.indirect_dependencies.len()
    }

    /// True when the manifest has no dependencies at all.
    pub fn is_empty(&self) -> bool {
        self.direct_dependencies.is_empty() && self.indirect_dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_value_equality() {
        let a = Package::new("pkg:npm/lodash@4.17.21");
        let b = Package::new("pkg:npm/lodash@4.17.21".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "pkg:npm/lodash@4.17.21");
    }

    #[test]
    fn test_manifest_set_semantics() {
        let mut manifest = Manifest::new("app", "sbom.spdx.json");
        manifest.add_direct_dependency(Package::new("pkg:npm/lodash@4.17.21"));
        manifest.add_direct_dependency(Package::new("pkg:npm/lodash@4.17.21"));

        assert_eq!(manifest.direct_dependencies.len(), 1);
        assert_eq!(manifest.dependency_count(), 1);
    }

    #[test]
    fn test_manifest_scope_insertion() {
        let mut manifest = Manifest::new("app", "sbom.spdx.json");
        manifest.add_dependency(Package::new("pkg:npm/a@1"), DependencyScope::Direct);
        manifest.add_dependency(Package::new("pkg:npm/b@2"), DependencyScope::Indirect);

        assert_eq!(manifest.direct_dependencies.len(), 1);
        assert_eq!(manifest.indirect_dependencies.len(), 1);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::new("app", "sbom.spdx.json");
        assert!(manifest.is_empty());
        assert_eq!(manifest.dependency_count(), 0);
    }
}
