//! # JFrog CLI Artifactory Library
//!
//! Repository templates, release bundles and signed evidence for the JFrog platform.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod evidence;
pub mod lifecycle;
pub mod platform;
pub mod repository;
pub mod version;

/// CLI plugin for the JFrog platform
///
/// Creates and updates Artifactory repositories from templates, creates and distributes
/// release bundles, and attaches signed evidence to artifacts, builds, release bundles
/// and packages.
#[derive(Parser)]
#[command(
    name = "jf-artifactory",
    version,
    about = "CLI plugin for Artifactory repositories, release bundles and evidence",
    long_about = "Command-line plugin for the JFrog platform.\n\nCreates and updates repositories from JSON/YAML templates, creates and distributes\nrelease bundles, and signs evidence for artifacts, builds, release bundles and packages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
