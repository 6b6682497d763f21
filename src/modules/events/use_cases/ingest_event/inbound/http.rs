use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::EventError;
use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::modules::events::use_cases::ingest_event::handler::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct IngestEventBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub payload: Option<String>,
}

#[derive(Serialize)]
pub struct IngestEventResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<IngestEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected event body");
            return ErrorBody::response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let command = IngestEvent {
        id: body.id.unwrap_or_default(),
        timestamp: body.timestamp.unwrap_or(0),
        payload: body.payload.unwrap_or_default(),
    };

    match state.ingest_handler.handle(command).await {
        Ok(id) => (StatusCode::CREATED, Json(IngestEventResponse { id })).into_response(),
        Err(ApplicationError::Validation(EventError::MissingId))
        | Err(ApplicationError::Store(EventStoreError::MissingId)) => {
            ErrorBody::response(StatusCode::BAD_REQUEST, "missing event ID")
        }
        Err(ApplicationError::Store(EventStoreError::DuplicateId(_))) => {
            ErrorBody::response(StatusCode::CONFLICT, "Event with this ID already exists")
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store event");
            ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store event")
        }
    }
}
