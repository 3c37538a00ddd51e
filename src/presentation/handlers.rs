// HTTP request handlers
use crate::domain::crop;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::series::ChartState;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::{DateTime, Utc};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Latest reading evaluated into metric cards, water level, and system status
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let snapshot = state
        .dashboard_service
        .latest_dashboard()
        .await?
        .ok_or(ApiError::NoData)?;
    Ok(Json(snapshot))
}

/// Assembled per-metric series, gaps, and the visible window.
///
/// Without query parameters this returns the live incrementally-maintained
/// state; with `from`/`to` that range is fetched and assembled ad hoc.
pub async fn get_history(
    Query(range): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartState>, ApiError> {
    let chart = if range.from.is_some() || range.to.is_some() {
        state
            .chart_service
            .assemble_range(range.from, range.to)
            .await?
    } else {
        state.chart_service.snapshot().await
    };
    Ok(Json(chart))
}

/// Live feed of accepted appends as server-sent events
pub async fn stream_history(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.chart_service.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|update| async move {
        match update {
            Ok(update) => Some(Event::default().json_data(&update)),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!("live feed subscriber lagged, skipped {} updates", skipped);
                None
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Static crop-care catalog
pub async fn list_crops() -> Json<&'static [crop::Crop]> {
    Json(crop::CATALOG)
}
