// src/main.rs
use models::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod extractor;
mod fetcher;
mod models;

use cli::CliApp;
use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration, deferring the fallback notice until the
    // subscriber is up so it is not silently dropped.
    let (config, config_error) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Setup logging
    let directive = format!("infoharvest={}", config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap_or_else(|_| "info".parse().unwrap())),
        )
        .init();

    if let Some(e) = config_error {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    let app = CliApp::new(&config);

    // Graceful shutdown on Ctrl+C
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn fallback_config_yields_a_valid_filter_directive() {
        let directive = format!("infoharvest={}", Config::default().logging.level);
        assert!(directive.parse::<Directive>().is_ok());
    }
}

