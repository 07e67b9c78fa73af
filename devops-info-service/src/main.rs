//! devops-info-service - HTTP information service
//!
//! Reports service metadata, host facts, uptime and request details on `/`
//! and liveness on `/health`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use devops_info_common::time::iso_utc;
use devops_info_common::StartTime;
use devops_info_service::{build_router, AppState, Config};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments (env fallbacks: HOST, PORT, DEBUG)
    let config = Config::parse();

    // Initialize tracing; RUST_LOG takes precedence over the DEBUG-derived default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    info!(
        "devops-info-service v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    info!("Starting application on {}:{}", config.host, config.port);
    if config.debug {
        info!("Debug logging enabled");
    }

    let listener = config
        .bind_listener()
        .await
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;

    let start = StartTime::now();
    info!("Serving since {}", iso_utc(start.started_at()));
    let app = build_router(AppState::new(start));

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
