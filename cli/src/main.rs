//! spacefetch
//!
//! Fetches content types, entries, assets, locales, webhooks and editor
//! interfaces of a space and writes them as one JSON document.
//!
//! Usage:
//!   spacefetch --space-id <ID> --management-token <TOKEN> --output space.json

use anyhow::Result;
use clap::Parser;
use spacefetch_cli::{run, Args};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    run(&args).await?;
    Ok(())
}
