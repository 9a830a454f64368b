#![forbid(unsafe_code)]

use bijux_portfolio_server::{
    build_router, validate_startup_config_contract, AppState, InMemoryPortfolioStore,
    ServerConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("unix signal registration failed; falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    init_tracing(config.log_json);
    validate_startup_config_contract(&config).map_err(|e| e.to_string())?;

    let addr = config.socket_addr().map_err(|e| e.to_string())?;
    let drain = config.shutdown_drain;
    let state = AppState::with_config(Arc::new(InMemoryPortfolioStore::seeded()), config);
    let static_dir = state.config.static_dir.clone();
    if !static_dir.is_dir() {
        warn!(static_dir = %static_dir.display(), "static dir missing; /static/ will return 404");
    }
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr} failed: {e}"))?;
    info!(%addr, "portfolio-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(drain_ms = drain.as_millis() as u64, "shutdown signal received");
            if !drain.is_zero() {
                tokio::time::sleep(drain).await;
            }
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
