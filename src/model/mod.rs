//! Data model: SPDX input structures and snapshot output structures.

pub mod manifest;
pub mod spdx;
pub mod snapshot;

pub use manifest::{DependencyScope, Manifest, Package};
pub use snapshot::{Detector, Job, Snapshot};
pub use spdx::{SpdxDocument, SpdxExternalRef, SpdxPackage, SpdxRelationship};
