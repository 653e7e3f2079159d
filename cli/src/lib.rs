//! Command-line front end for spacefetch.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use spacefetch_client::{HttpManagementClient, ManagementConfig};
use spacefetch_export::{get_full_source_space, FetchOptions, DEFAULT_MAX_CONCURRENT_REQUESTS};
use spacefetch_types::{MAX_ALLOWED_LIMIT, SourceSpace, SpaceId};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "spacefetch")]
#[command(about = "Fetch the full contents of a space through the management API")]
pub struct Args {
    /// Id of the space to export
    #[arg(long, env = "SPACEFETCH_SPACE_ID")]
    pub space_id: String,

    /// Management API access token
    #[arg(long, env = "SPACEFETCH_MANAGEMENT_TOKEN", hide_env_values = true)]
    pub management_token: String,

    /// Base URL of the management API
    #[arg(long, default_value = "https://api.contentful.com")]
    pub api_base_url: String,

    /// Skip content types, locales and editor interfaces
    #[arg(long)]
    pub skip_content_model: bool,

    /// Skip entries and assets
    #[arg(long)]
    pub skip_content: bool,

    /// Skip webhooks
    #[arg(long)]
    pub skip_webhooks: bool,

    /// Items requested per page (1-1000)
    #[arg(long, default_value_t = MAX_ALLOWED_LIMIT)]
    pub page_limit: u32,

    /// Editor-interface requests allowed in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_REQUESTS)]
    pub max_concurrent_requests: usize,

    /// Write the export to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn management_config(&self) -> ManagementConfig {
        ManagementConfig {
            api_base_url: self.api_base_url.clone(),
            access_token: self.management_token.clone(),
            ..Default::default()
        }
    }

    pub fn fetch_options(&self) -> Result<FetchOptions> {
        let space_id = SpaceId::parse(&self.space_id).context("Invalid --space-id")?;
        Ok(FetchOptions::new(space_id)
            .skip_content_model(self.skip_content_model)
            .skip_content(self.skip_content)
            .skip_webhooks(self.skip_webhooks)
            .page_limit(self.page_limit)
            .max_concurrent_requests(self.max_concurrent_requests))
    }
}

/// Fetches the space described by `args` and writes it out.
pub async fn run(args: &Args) -> Result<SourceSpace> {
    let options = args.fetch_options()?;
    let client = HttpManagementClient::new(args.management_config())
        .context("Failed to create management API client")?;

    let source = get_full_source_space(&client, &options)
        .await
        .with_context(|| format!("Failed to fetch space {}", options.space_id))?;

    write_output(&source, args.output.as_deref())?;
    info!("Exported {} records from space {}", source.counts().total(), options.space_id);
    Ok(source)
}

/// Writes the export as pretty JSON to `path`, or to stdout when `None`.
pub fn write_output(source: &SourceSpace, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(source).context("Failed to serialize export")?;

    match path {
        Some(path) => {
            fs::write(path, json.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Export written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write export to stdout")?;
        }
    }
    Ok(())
}
