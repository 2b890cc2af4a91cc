//! Blackjack room server.

use std::sync::Arc;

use anyhow::Result;
use bjroom::{Registry, ServerOptions, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let options = ServerOptions::from_env()?;
    let app = server::router(Arc::new(Registry::new()));

    let addr = options.socket_addr();
    tracing::info!(%addr, "blackjack server running");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("received shutdown signal");
}
