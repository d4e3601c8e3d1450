//! Gupshup relay HTTP server
//!
//! Main entry point for the webhook relay.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{DispatchService, EchoService, MessageGatewayPort};
use infrastructure::{
    AppConfig, GupshupAdapter, LogFormat, init_tracing, telemetry::DEFAULT_LOG_FILTER,
};
use presentation_http::{routes, serve_with_shutdown, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    let log_format: LogFormat = config.server.log_format.parse()?;
    init_tracing(log_format, DEFAULT_LOG_FILTER)?;

    info!("Gupshup relay v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(anyhow::Error::msg)?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        channel = %config.gupshup.channel,
        "Configuration loaded"
    );

    let adapter = Arc::new(
        GupshupAdapter::from_config(&config.gupshup)
            .context("Failed to initialize Gupshup client")?,
    );
    let gateway: Arc<dyn MessageGatewayPort> = adapter.clone();

    // Initialize services
    let dispatch_service = Arc::new(DispatchService::new(gateway, adapter));
    let echo_service = Arc::new(EchoService::new(Arc::clone(&dispatch_service)));

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let state = AppState {
        dispatch_service,
        echo_service,
        config: Arc::new(config),
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    serve_with_shutdown(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
