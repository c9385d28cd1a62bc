//! Soil carbon dashboard server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use soil_core::config::AppConfig;
use soil_server::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Soil carbon monitoring dashboard server
#[derive(Parser, Debug)]
#[command(name = "soild")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "SOIL_CONFIG", default_value = "config/soild.toml")]
    config: String,

    /// Check connectivity to the store at startup and log the outcome
    #[arg(long)]
    check_store: bool,
}

/// Load configuration from defaults, an optional TOML file and SOIL_ env vars.
fn load_config(path: &str) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if std::path::Path::new(path).exists() {
        tracing::info!(config_path = %path, "Loading configuration from file");
        figment = figment.merge(Toml::file(path));
    } else {
        tracing::info!(
            config_path = %path,
            "No config file found, using defaults and environment"
        );
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("SOIL_").split("__").ignore(&["config"]))
        .extract()
        .context("failed to load configuration")?;

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("soild v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;

    let store =
        soil_store::from_config(&config.database).context("failed to configure soil store")?;
    tracing::info!(
        backend = config.database.backend_name(),
        export_dir = %config.export.dir.display(),
        store_errors_as_empty = config.server.store_errors_as_empty,
        "Soil store configured"
    );

    // Connections are opened per request, so an unreachable store is not
    // fatal at startup.
    if args.check_store {
        match store.health_check().await {
            Ok(()) => tracing::info!("Soil store reachable"),
            Err(e) => tracing::warn!(error = %e, "Soil store not reachable at startup"),
        }
    }

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;
    let state = AppState::new(config, store);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
