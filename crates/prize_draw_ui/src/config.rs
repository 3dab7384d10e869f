use std::time::Duration;

use clap::Args;
use prize_draw_core::remote::{ConfigError, RemoteConfig, RestPrizeService};
use prize_draw_core::{ServiceError, DEFAULT_SHAKE_DELAY};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Connection flags shared by the UI and the CLI.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Project URL of the hosted service (the REST prefix is appended)
    #[arg(long, env = "PRIZE_DRAW_BASE_URL")]
    pub base_url: String,
    /// Public API key sent with every request
    #[arg(long, env = "PRIZE_DRAW_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// Per-request timeout; requests wait indefinitely when unset
    #[arg(long, env = "PRIZE_DRAW_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build service client: {0}")]
    Client(#[from] ServiceError),
}

impl ServiceArgs {
    pub fn remote_config(&self) -> Result<RemoteConfig, ConfigError> {
        Ok(RemoteConfig::new(&self.base_url, &self.api_key)?
            .with_request_timeout(self.request_timeout_secs.map(Duration::from_secs)))
    }

    pub fn connect(&self) -> Result<RestPrizeService, StartupError> {
        Ok(RestPrizeService::new(self.remote_config()?)?)
    }
}

#[derive(Debug, Clone, Args)]
pub struct DrawArgs {
    /// How long the machine shakes before the draw is requested
    #[arg(
        long,
        env = "PRIZE_DRAW_SHAKE_DELAY_MS",
        default_value_t = DEFAULT_SHAKE_DELAY.as_millis() as u64
    )]
    pub shake_delay_ms: u64,
}

impl DrawArgs {
    pub fn shake_delay(&self) -> Duration {
        Duration::from_millis(self.shake_delay_ms)
    }
}

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
