//! SPDX-to-manifest conversion engine.
//!
//! Three pieces composed in a linear pipeline: the purl resolver derives one
//! canonical identifier per package, the classifier decides direct versus
//! indirect, and the manifest builder walks a document applying both. All of
//! it is pure, synchronous and total over already-parsed data.

mod classify;
mod manifest;
mod purl;

pub use classify::classify;
pub use manifest::build_manifest;
pub use purl::{encode_version, replace_version_escape, resolve_purl};
