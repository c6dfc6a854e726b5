use std::sync::Arc;

use anyhow::Context;
use schedule_pdf_mupdf::MupdfBackend;
use schedule_web::{AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Refuse to start on an unsafe CORS policy
    let config = ServerConfig::from_env().context("invalid server configuration")?;
    tracing::info!(
        environment = ?config.environment,
        origins = ?config.cors.origins(),
        "CORS configured"
    );

    let state = Arc::new(AppState::new(Arc::new(MupdfBackend::new())));
    let app = schedule_web::router(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
