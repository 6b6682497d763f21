use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::ingest_event::inbound::http as ingest_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorBody {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/events", get(list_http::handle).post(ingest_http::handle))
        .route("/events/{id}", get(get_http::handle))
        .route("/health", get(health))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
