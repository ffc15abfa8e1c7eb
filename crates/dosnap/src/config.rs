use std::env;

use clap::Parser;

use crate::error::RotateError;

/// Snapshot name applied when `--snapshot-name` is not given.
pub const DEFAULT_SNAPSHOT_NAME: &str = "Automatic Snapshot";

/// CLI surface for the rotation tool.
#[derive(Debug, Parser, Clone)]
#[command(
    author,
    version,
    about = "Rotate automatic DigitalOcean droplet snapshots"
)]
pub struct CliArgs {
    /// DigitalOcean personal access token (falls back to DIGITALOCEAN_TOKEN).
    #[arg(long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Name shared by the snapshots this tool creates and prunes.
    #[arg(
        long = "snapshot-name",
        value_name = "NAME",
        default_value = DEFAULT_SNAPSHOT_NAME
    )]
    pub snapshot_name: String,

    /// Number of snapshots to keep per droplet once rotation has run.
    #[arg(long = "max-snapshots", value_name = "COUNT", default_value_t = 7)]
    pub max_snapshots: usize,

    /// Droplet IDs to rotate, processed in the order given.
    #[arg(value_name = "DROPLET_ID", required = true, num_args = 1..)]
    pub droplets: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub token: String,
    pub api_base_url: String,
    pub snapshot_name: String,
    pub max_snapshots: usize,
    pub droplets: Vec<u64>,
}

impl CliArgs {
    pub fn resolve(self) -> Result<AppConfig, RotateError> {
        let token = match self.token.filter(|token| !token.trim().is_empty()) {
            Some(token) => token,
            None => env::var("DIGITALOCEAN_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .ok_or_else(|| {
                    RotateError::Config(
                        "no API token provided; pass --token or set DIGITALOCEAN_TOKEN".to_string(),
                    )
                })?,
        };

        let api_base_url = env::var("DIGITALOCEAN_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "https://api.digitalocean.com".to_string());

        Ok(AppConfig {
            token,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            snapshot_name: self.snapshot_name,
            max_snapshots: self.max_snapshots,
            droplets: self.droplets,
        })
    }
}
