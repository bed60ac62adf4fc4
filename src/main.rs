// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::refresh_driver::RefreshDriver;
use crate::application::retry::RetryingFetcher;
use crate::application::section_renderer::SectionRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_transport::ReqwestTransport;
use crate::infrastructure::region_store::RegionStore;
use crate::infrastructure::tokio_sleeper::TokioSleeper;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_page, health_check, refresh_all, refresh_region, region_fragment,
};
use crate::presentation::templates::Templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    tracing::info!(
        base_url = %config.api.base_url,
        max_retries = config.retry.max_retries,
        retry_delay_ms = config.retry.delay_ms,
        refresh_interval_ms = config.refresh.interval_ms,
        "configuration loaded"
    );

    // Adapters (infrastructure layer)
    let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);
    let regions = Arc::new(RegionStore::new());
    let templates = Templates::new(config.render.escape_text);

    // Use cases (application layer)
    let fetcher = RetryingFetcher::new(transport, Arc::new(TokioSleeper), config.retry_policy());
    let renderer = Arc::new(SectionRenderer::new(
        fetcher,
        regions.clone(),
        templates,
        config.api.base_url.clone(),
    ));
    let driver = RefreshDriver::new(renderer, config.refresh_interval());
    let refresh_task = driver.start();

    let state = Arc::new(AppState {
        driver,
        regions,
        templates,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/refresh", post(refresh_all))
        .route("/regions/:id", get(region_fragment))
        .route("/regions/:id/refresh", post(refresh_region))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.bind_addr;
    tracing::info!("Starting corporate dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresh_task.abort();
    tracing::info!("corporate dashboard stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
