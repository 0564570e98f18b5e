//! vietcal-server: serves the notification trigger endpoint.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use vietcal_api::AppState;
use vietcal_messaging::{HttpPushProvider, MessagingConfig, NotificationDispatcher};

#[derive(Parser)]
#[command(name = "vietcal-server")]
#[command(about = "VietCal notification trigger server")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0:8787", value_name = "ADDR")]
    bind: SocketAddr,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        vietcal_telemetry::TelemetryConfig::verbose()
    } else {
        vietcal_telemetry::TelemetryConfig::default()
    };
    vietcal_telemetry::init_with_config(telemetry)?;

    let config = MessagingConfig::from_env().context("loading messaging configuration")?;
    let default_topic = config.default_topic.clone();
    let provider = HttpPushProvider::new(config).context("building push provider")?;
    let dispatcher =
        NotificationDispatcher::new(Arc::new(provider)).with_default_topic(default_topic);

    let app = vietcal_api::router(AppState::new(dispatcher));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    tracing::info!(addr = %cli.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}
