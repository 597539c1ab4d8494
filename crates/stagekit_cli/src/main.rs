use std::env;

use clap::Parser;
use stagekit_fs::{SpecReplicateOptions, replicate};
use tracing_subscriber::EnvFilter;

/// Copy every file in css/, img/, js/ and templates/ into testing/.
///
/// Paths are relative to the current directory. testing/ must already exist.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let current_dir = env::current_dir()?;
    let report = replicate(&current_dir, &SpecReplicateOptions::default())?;
    tracing::info!("{report}");
    Ok(())
}
