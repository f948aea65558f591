//! CLI argument parsing

use clap::Parser;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::config::{defaults, CfConfig, ReportOptions};
use crate::error::Result;

/// Cloud Foundry app endpoint lister
#[derive(Parser, Debug)]
#[command(name = "cf-apps")]
#[command(version)]
#[command(
    about = "List running Cloud Foundry apps and their endpoints, space by space",
    long_about = None,
    after_help = "Example:\n  cf-apps https://api.cf.example.com \"$(cf oauth-token)\""
)]
pub struct Cli {
    /// Control plane API base URL (e.g. https://api.cf.example.com)
    pub base_url: String,

    /// Authorization header value, sent as given (e.g. "bearer eyJ...")
    pub token: String,

    /// Maximum concurrent stats requests per space (default: one per started app)
    #[arg(short, long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Connection settings for the client
    pub fn config(&self) -> Result<CfConfig> {
        Ok(CfConfig::new(self.base_url.clone(), self.token.clone())?
            .with_timeout(self.timeout.map(Duration::from_secs)))
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            concurrency: self.concurrency,
        }
    }
}
