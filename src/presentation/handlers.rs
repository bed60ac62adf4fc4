// HTTP request handlers
use crate::domain::region::Region;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full page with the current content of every region
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(
        state.regions.as_ref(),
        &state.templates,
        state.driver.interval(),
    ))
}

/// Current fragment of a single region
pub async fn region_fragment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(region) = Region::from_id(&id) else {
        return unknown_region(&id);
    };

    let html = state
        .regions
        .current(region)
        .map(|view| view.html)
        .unwrap_or_else(|| state.templates.loading());

    Html(html).into_response()
}

/// Header refresh and error retry control: re-run exactly this region's update
pub async fn refresh_region(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(region) = Region::from_id(&id) else {
        return unknown_region(&id);
    };

    tracing::info!(region = region.id(), "manual refresh requested");
    state.driver.refresh_region(region);

    Redirect::to("/").into_response()
}

pub async fn refresh_all(State(state): State<Arc<AppState>>) -> Redirect {
    tracing::info!("manual refresh of all regions requested");
    state.driver.refresh_all();

    Redirect::to("/")
}

fn unknown_region(id: &str) -> Response {
    tracing::debug!(region = id, "unknown region requested");
    (StatusCode::NOT_FOUND, format!("Unknown region: {}", id)).into_response()
}
