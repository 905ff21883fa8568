//! Route handlers.
//!
//! Each handler is single-shot: touch the counters, maybe inject a fault,
//! write one JSON body.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::Response,
    Json,
};

use crate::http::response::ServiceResponse;
use crate::http::server::AppState;
use crate::observability::MetricsSnapshot;

/// Error kind used by `/generate-error` when `type` is missing or empty.
pub const DEFAULT_ERROR_TYPE: &str = "generic";

/// `GET /health`. Never counted.
pub async fn health(State(state): State<AppState>) -> Response {
    ServiceResponse::new(state.service_name())
        .with_message("healthy")
        .respond(StatusCode::OK)
}

/// `GET /generate-error?type=<kind>`. Always 500.
///
/// Query pairs are taken as a list so a repeated `type` resolves to its
/// first occurrence instead of rejecting the request.
pub async fn generate_error(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.counters.record_request();
    state.counters.record_error();

    let error_type = params
        .iter()
        .find(|(key, _)| key == "type")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ERROR_TYPE);

    tracing::debug!(error_type = %error_type, "Generating forced error");

    ServiceResponse::new(state.service_name())
        .with_error(format!("Generated error: {error_type}"))
        .with_message("Error generated successfully")
        .respond(StatusCode::INTERNAL_SERVER_ERROR)
}

/// `GET /random-error`. Fails with the configured probability.
pub async fn random_error(State(state): State<AppState>) -> Response {
    state.counters.record_request();

    if state.faults.roll() {
        state.counters.record_error();
        tracing::debug!("Injecting random error");
        return ServiceResponse::new(state.service_name())
            .with_error("Random error occurred")
            .respond(StatusCode::INTERNAL_SERVER_ERROR);
    }

    ServiceResponse::new(state.service_name())
        .with_message("Request successful")
        .respond(StatusCode::OK)
}

/// `GET /timeout`. Counted as an error up front, then hangs.
pub async fn timeout(State(state): State<AppState>) -> Response {
    state.counters.record_request();
    state.counters.record_error();

    tracing::debug!(delay = ?state.faults.hang_duration(), "Hanging request");
    state.faults.hang().await;

    ServiceResponse::new(state.service_name())
        .with_message("This should have timed out")
        .respond(StatusCode::OK)
}

/// `GET /metrics`. Never counted.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.counters.snapshot(state.service_name()))
}

/// Any other path. Never counted.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    ServiceResponse::new(state.service_name())
        .with_error(format!("Not found: {}", uri.path()))
        .respond(StatusCode::NOT_FOUND)
}

/// Known path, wrong method. Never counted.
pub async fn method_not_allowed(State(state): State<AppState>, method: Method) -> Response {
    ServiceResponse::new(state.service_name())
        .with_error(format!("Method not allowed: {method}"))
        .respond(StatusCode::METHOD_NOT_ALLOWED)
}
