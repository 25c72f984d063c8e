//! Run configuration.
//!
//! Plain data assembled by the CLI from flags and environment. The core
//! conversion never reads process state itself; everything it needs arrives
//! through these structs.

use std::path::PathBuf;

/// Where to look for SPDX files.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Base directory searched for SBOM files
    pub dir: PathBuf,
    /// Glob pattern relative to `dir`
    pub pattern: String,
    /// Skip unparseable files instead of aborting the run
    pub keep_going: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            pattern: "*.spdx.json".to_string(),
            keep_going: false,
        }
    }
}

/// Job correlation metadata for a snapshot.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub correlator: String,
    pub run_id: String,
    pub sha: Option<String>,
    pub git_ref: Option<String>,
}

/// Configuration for the `convert` command.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: InputConfig,
    /// Write the manifest payload here instead of stdout
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Configuration for the `submit` command.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub input: InputConfig,
    pub job: JobConfig,
    /// Ingestion endpoint URL
    pub api_url: String,
    /// Bearer token for the endpoint
    pub token: Option<String>,
    pub quiet: bool,
}
