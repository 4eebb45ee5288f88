//! # JFrog CLI Artifactory
//!
//! Command-line plugin for the JFrog platform.
//!
//! ## Quick Start
//!
//! ```bash
//! # Register a server (token read from $JFROG_ACCESS_TOKEN)
//! jf-artifactory server add
//!
//! # Create repositories from a template
//! jf-artifactory repo-create repos.yaml --vars "env=prod"
//!
//! # Sign evidence for an artifact
//! jf-artifactory create-evidence --predicate scan.json --predicate-type https://in-toto.io/attestation/vulns \
//!     --key private.pem --repo-path generic-local/app.tgz
//! ```
//!
//! Log verbosity is controlled with `JFROG_CLI_LOG_LEVEL` (e.g. `debug`), logs go to stderr.

use clap::Parser;
use jfrog_cli_artifactory::{commands, constants::LOG_LEVEL_ENV, Cli};
use std::process::exit;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();
    tracing_subscriber::registry().with(layer).with(filter).init();

    let cli = Cli::parse();
    let Some(cmd) = cli.cmd else {
        eprintln!("No command provided. Use --help to see available commands.");
        exit(1);
    };

    if let Err(error) = commands::run(cmd).await {
        error!("{error:?}");
        exit(1);
    }
}
