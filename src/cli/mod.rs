//! Command handlers.
//!
//! Thin orchestration over discovery, the conversion pipeline and the
//! submission client. Anything algorithmic lives in [`crate::convert`].

use crate::config::{ConvertConfig, SubmitConfig};
use crate::discover::discover_files;
use crate::model::Job;
use crate::pipeline::{build_snapshot, convert_files, ConvertOptions};
use anyhow::{Context, Result};

/// Run the `convert` command: discover, convert, print manifests as JSON.
pub fn run_convert(config: ConvertConfig) -> Result<()> {
    let files = discover_files(&config.input.dir, &config.input.pattern)
        .context("discovering SPDX files")?;

    if !config.quiet {
        tracing::info!("Processing {} files", files.len());
    }

    let options = ConvertOptions {
        keep_going: config.input.keep_going,
    };
    let manifests = convert_files(&files, &options).context("converting SPDX documents")?;

    let payload =
        serde_json::to_string_pretty(&manifests).context("serializing manifest payload")?;

    match config.output_file {
        Some(path) => {
            std::fs::write(&path, payload)
                .with_context(|| format!("writing {}", path.display()))?;
            if !config.quiet {
                eprintln!("Wrote {} manifests to {}", manifests.len(), path.display());
            }
        }
        None => println!("{payload}"),
    }

    Ok(())
}

/// Run the `submit` command: discover, convert, aggregate, POST.
pub fn run_submit(config: SubmitConfig) -> Result<()> {
    let files = discover_files(&config.input.dir, &config.input.pattern)
        .context("discovering SPDX files")?;

    if !config.quiet {
        tracing::info!("Processing {} files", files.len());
    }

    let job = Job {
        correlator: config.job.correlator.clone(),
        id: config.job.run_id.clone(),
    };
    let options = ConvertOptions {
        keep_going: config.input.keep_going,
    };
    let mut snapshot = build_snapshot(&files, job, &options).context("building snapshot")?;

    if let (Some(sha), Some(git_ref)) = (config.job.sha.clone(), config.job.git_ref.clone()) {
        snapshot = snapshot.with_commit(sha, git_ref);
    }

    #[cfg(feature = "submission")]
    {
        use crate::submit::{SnapshotClient, SnapshotClientConfig};

        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .context("no token provided; set --token or the SNAPSHOT_TOKEN env var")?;

        let client = SnapshotClient::new(SnapshotClientConfig::new(config.api_url.clone(), token))
            .context("creating submission client")?;
        client.submit(&snapshot).context("submitting snapshot")?;

        if !config.quiet {
            eprintln!(
                "Submitted snapshot with {} manifests to {}",
                snapshot.manifest_count(),
                config.api_url
            );
        }
        Ok(())
    }

    #[cfg(not(feature = "submission"))]
    {
        let _ = snapshot;
        anyhow::bail!("this build was compiled without the `submission` feature")
    }
}
