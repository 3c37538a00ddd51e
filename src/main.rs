// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::dashboard_service::DashboardService;
use crate::application::polling_feed::PollingFeed;
use crate::infrastructure::config::{load_api_config, load_ranges_config};
use crate::infrastructure::rest_repository::RestTowerLogRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_history, health_check, list_crops, stream_history,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let api_config = load_api_config()?;
    let ranges = load_ranges_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(RestTowerLogRepository::new(api_config.api.base_url.clone()));

    // Create services (application layer)
    let chart_service = Arc::new(ChartService::new(repository.clone()));
    let dashboard_service = DashboardService::new(repository.clone(), ranges);

    // Seed-then-stream: the historical seed must complete before the
    // polling feed is allowed to append.
    chart_service
        .seed()
        .await
        .context("failed to seed history from the tower-log API")?;

    let feed = PollingFeed::new(
        repository.clone(),
        chart_service.clone(),
        Duration::from_millis(api_config.api.poll_interval_ms),
    );
    tokio::spawn(feed.run());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        chart_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/history", get(get_history))
        .route("/history/live", get(stream_history))
        .route("/crops", get(list_crops))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    tracing::info!("starting tower-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
