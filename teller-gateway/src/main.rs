//! Entry point for the `teller-gateway` HTTP server.

use std::sync::Arc;

use teller_gateway::{
    config::GatewayConfig,
    error::GatewayError,
    probe::{DatabaseProbe, PgProbe, UnconfiguredProbe},
    routes::{create_router, AppState},
    store::AccountStore,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "teller-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = GatewayConfig::from_env()?;

    let probe: Arc<dyn DatabaseProbe> = match &config.database_url {
        Some(url) => Arc::new(PgProbe::connect_lazy(url, config.probe_timeout)?),
        None => {
            warn!("no database URL configured; /health/db will report canConnect=false");
            Arc::new(UnconfiguredProbe)
        }
    };

    let store = Arc::new(AccountStore::new());
    info!(accounts = store.len(), "account store seeded");

    let app = create_router(AppState::new(store, probe));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await.inspect_err(|e| {
        error!(addr = %config.listen_addr, error = %e, "failed to bind");
    })?;

    info!(addr = %config.listen_addr, "teller-gateway listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("teller-gateway stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
