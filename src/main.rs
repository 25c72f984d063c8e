//! spdx-snapshot: SPDX SBOM to dependency-graph snapshot converter
//!
//! Converts SPDX JSON documents into dependency snapshot payloads and
//! optionally submits them to an ingestion endpoint.

use anyhow::Result;
use clap::{Parser, Subcommand};
use spdx_snapshot::{
    cli,
    config::{ConvertConfig, InputConfig, JobConfig, SubmitConfig},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  SPDX: 2.2, 2.3 (JSON)",
        "\n\nFeatures:",
        "\n  Purl resolution and repair, direct/indirect classification,",
        "\n  dependency snapshot submission"
    )
}

#[derive(Parser)]
#[command(name = "spdx-snapshot")]
#[command(version, long_version = build_long_version())]
#[command(about = "Convert SPDX SBOMs into dependency-graph snapshots", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert all SPDX files in a directory and print the manifests
    spdx-snapshot convert --dir sboms/ --pattern '*.spdx.json'

    # Convert and submit a snapshot for a CI run
    spdx-snapshot submit --dir sboms/ --correlator build --run-id \"$RUN_ID\" \\
        --api-url https://api.example.com/snapshots")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by both subcommands for locating input files
#[derive(Parser)]
struct InputArgs {
    /// Directory to search for SPDX files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Glob pattern relative to the search directory
    #[arg(short, long, default_value = "*.spdx.json")]
    pattern: String,

    /// Skip files that fail to parse instead of aborting
    #[arg(long)]
    keep_going: bool,
}

/// Arguments for the `convert` subcommand
#[derive(Parser)]
struct ConvertArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `submit` subcommand
#[derive(Parser)]
struct SubmitArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Job correlator grouping snapshots from the same workflow
    #[arg(long)]
    correlator: String,

    /// Run identifier for this submission
    #[arg(long)]
    run_id: String,

    /// Commit SHA the snapshot describes
    #[arg(long)]
    sha: Option<String>,

    /// Git ref the snapshot describes (e.g. refs/heads/main)
    #[arg(long = "ref")]
    git_ref: Option<String>,

    /// Snapshot ingestion endpoint URL
    #[arg(long)]
    api_url: String,

    /// Bearer token for the ingestion endpoint
    #[arg(long, env = "SNAPSHOT_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert SPDX files and print the resulting manifests
    Convert(ConvertArgs),

    /// Convert SPDX files and submit the aggregated snapshot
    Submit(SubmitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Convert(args) => cli::run_convert(ConvertConfig {
            input: InputConfig {
                dir: args.input.dir,
                pattern: args.input.pattern,
                keep_going: args.input.keep_going,
            },
            output_file: args.output_file,
            quiet: cli.quiet,
        }),

        Commands::Submit(args) => cli::run_submit(SubmitConfig {
            input: InputConfig {
                dir: args.input.dir,
                pattern: args.input.pattern,
                keep_going: args.input.keep_going,
            },
            job: JobConfig {
                correlator: args.correlator,
                run_id: args.run_id,
                sha: args.sha,
                git_ref: args.git_ref,
            },
            api_url: args.api_url,
            token: args.token,
            quiet: cli.quiet,
        }),
    }
}
