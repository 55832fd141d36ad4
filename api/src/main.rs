use axum::http::header::InvalidHeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::error;

mod api;
mod config;
mod mock;

/// Development stand-in for the recipe generation service.
#[derive(Parser)]
struct Opt {
    /// Address to listen on, overrides cooked.toml
    #[clap(long)]
    address: Option<SocketAddr>,

    /// Wait this many milliseconds before answering a recipe request
    #[clap(long, default_value_t = 0)]
    delay_ms: u64,
}

/// Possible API errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read configuration: {0}")]
    ConfigurationError(#[from] toml::de::Error),
    #[error("Recipe name must not be empty")]
    EmptyRecipeName,
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// API result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn try_main() -> Result<()> {
    let opts = Opt::parse();
    let mut config = config::Config::new()?;

    if let Some(address) = opts.address {
        config.address = address;
    }

    let state = api::State::new(Duration::from_millis(opts.delay_ms));
    let app = api::router(state, &config.allowed_origins)?;

    api::run(app, config.address).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=info".into()),
        )
        .init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
