//! REST surface of the HTTP binary: health, metrics, and calculation.

use std::sync::Arc;

use axum::debug_handler;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::services::{self, CalculateParams, CalculationReport};
use crate::{FormView, McpError, WellnessMcpHandler};

pub struct AppState {
    pub metrics: PrometheusHandle,
    pub handler: WellnessMcpHandler,
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn calculate(
    Json(params): Json<CalculateParams>,
) -> Result<Json<CalculationReport>, (StatusCode, String)> {
    metrics::counter!("http_calculate_requests_total").increment(1);
    services::calculate(params.into_inputs())
        .map(Json)
        .map_err(map_err)
}

#[debug_handler]
async fn form(State(state): State<Arc<AppState>>) -> Json<FormView> {
    Json(state.handler.form_view().await)
}

fn map_err(e: McpError) -> (StatusCode, String) {
    match e {
        McpError::Core(_) => (StatusCode::BAD_REQUEST, e.to_string()),
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/calculate", post(calculate))
        .route("/form", get(form))
        .with_state(state)
}
