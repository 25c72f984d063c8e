//! Conversion pipeline: files in, manifests out.
//!
//! Each document is independent of every other, so files are converted in
//! parallel and results collected back in input order. Manifests themselves
//! are built single-threaded; no shared mutable state exists between
//! conversions.

use crate::convert::build_manifest;
use crate::error::Result;
use crate::model::{Job, Manifest, Snapshot};
use crate::parsers::parse_spdx;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Options controlling a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Skip files that fail to parse instead of aborting the run.
    ///
    /// A skipped file is logged and yields no manifest; it is never replaced
    /// by a fabricated empty one.
    pub keep_going: bool,
}

/// Convert a list of SPDX files into manifests, in input order.
///
/// With `keep_going` unset, the first malformed document aborts the run.
pub fn convert_files(files: &[PathBuf], options: &ConvertOptions) -> Result<Vec<Manifest>> {
    let results: Vec<(usize, Result<Manifest>)> = files
        .par_iter()
        .enumerate()
        .map(|(index, path)| (index, convert_file(path)))
        .collect();

    let mut manifests = Vec::with_capacity(files.len());
    for (index, result) in results {
        match result {
            Ok(manifest) => {
                tracing::info!(
                    file = %files[index].display(),
                    direct = manifest.direct_dependencies.len(),
                    indirect = manifest.indirect_dependencies.len(),
                    "converted document"
                );
                manifests.push(manifest);
            }
            Err(e) if options.keep_going => {
                tracing::warn!(file = %files[index].display(), "skipping file: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(manifests)
}

/// Convert a single SPDX file into a manifest.
pub fn convert_file(path: &Path) -> Result<Manifest> {
    let document = parse_spdx(path)?;
    Ok(build_manifest(&document, &path.display().to_string()))
}

/// Convert files and aggregate the manifests into a snapshot for `job`.
pub fn build_snapshot(
    files: &[PathBuf],
    job: Job,
    options: &ConvertOptions,
) -> Result<Snapshot> {
    let manifests = convert_files(files, options)?;

    let mut snapshot = Snapshot::new(job);
    for manifest in manifests {
        snapshot.add_manifest(manifest);
    }
    Ok(snapshot)
}
