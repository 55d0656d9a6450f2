use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yatra_core::SafetyStore;
use yatra_server::{
    AppState,
    config::{Config, ConfigLoad, ConfigLoader},
    push::ViewerRegistry,
    scheduler,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "yatra-server")]
#[command(about = "Tourist-safety monitoring backend with live position broadcast")]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// API token required on write endpoints and the push channel
    /// (overrides config)
    #[arg(long)]
    api_token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    let ConfigLoad {
        mut config,
        warnings,
        env_file_loaded,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(api_token) = args.api_token {
        config.auth.api_token = api_token;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    for warning in &warnings {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    info!(
        sim.tourists = config.sim.tourist_count,
        sim.alerts = config.sim.alert_count,
        sim.tick_ms = config.sim.tick_interval.as_millis() as u64,
        auth.protect_reads = config.auth.protect_reads,
        "simulation configuration in effect"
    );

    run_server(config).await
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(SafetyStore::seed(config.sim.clone()));
    let viewers = Arc::new(ViewerRegistry::new());

    let host = config.server.host.clone();
    let port = config.server.port;

    let state = AppState::new(store, viewers, Arc::new(config));

    scheduler::spawn(state.clone());

    let app = yatra_server::app(state);

    info!("Starting Yatra server (HTTP) on {host}:{port}");
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
