//! **Convert SPDX SBOMs into dependency-graph snapshots.**
//!
//! `spdx-snapshot` reads SPDX (JSON) Software Bill-of-Materials documents and
//! converts them into per-file manifests of canonical package URLs (purls),
//! classified as direct or transitive dependencies of the document's root.
//! The manifests aggregate into a snapshot payload ready for submission to a
//! dependency-tracking service.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the SPDX input structures ([`SpdxDocument`] and friends)
//!   and the output structures ([`Manifest`], [`Snapshot`]).
//! - **[`convert`]**: the conversion engine. [`convert::resolve_purl`] derives
//!   one canonical purl per package through a priority-ordered fallback chain
//!   and two normalization passes; [`convert::classify`] decides direct versus
//!   indirect; [`convert::build_manifest`] orchestrates both over a document.
//! - **[`parsers`]**: SPDX JSON deserialization.
//! - **[`pipeline`]**: file-list-in, manifests-out conversion runs.
//! - **[`discover`]**: glob-based input file discovery.
//! - **`submit`**: the snapshot submission HTTP client. Requires the
//!   `submission` feature flag (enabled by default).
//!
//! ## Getting Started: Converting a Document
//!
//! ```no_run
//! use std::path::Path;
//! use spdx_snapshot::{convert::build_manifest, parsers::parse_spdx};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = parse_spdx(Path::new("sbom.spdx.json"))?;
//!     let manifest = build_manifest(&document, "sbom.spdx.json");
//!
//!     println!(
//!         "{}: {} direct, {} indirect",
//!         manifest.name,
//!         manifest.direct_dependencies.len(),
//!         manifest.indirect_dependencies.len()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `submission`: enables the snapshot submission client. This adds network
//!   dependencies like `reqwest`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
#[cfg(feature = "submission")]
pub mod submit;

// Re-export main types for convenience
pub use config::{ConvertConfig, InputConfig, JobConfig, SubmitConfig};
pub use convert::{build_manifest, classify, resolve_purl};
pub use error::{ErrorContext, ParseErrorKind, Result, SnapshotError, SubmitErrorKind};
pub use model::{DependencyScope, Detector, Job, Manifest, Package, Snapshot, SpdxDocument};
pub use parsers::{parse_spdx, parse_spdx_str};
pub use pipeline::{build_snapshot, convert_files, ConvertOptions};
#[cfg(feature = "submission")]
pub use submit::{SnapshotClient, SnapshotClientConfig};
