use anyhow::Result;
use tracing::info;
use veracity::{config, server};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let production = config.server.is_production();

    // RUST_LOG may carry full filter directives; only a bare config level is validated.
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = config.server.log_level();
            if let Err(e) = validate_log_level(&level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            tracing_subscriber::EnvFilter::new(level)
        }
    };

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if production {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        "Starting veracity in {} mode",
        if production { "production" } else { "debug" }
    );
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
