use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.event_store.get(&id).await {
        Ok(event) => Json(event).into_response(),
        Err(EventStoreError::NotFound(_)) => {
            ErrorBody::response(StatusCode::NOT_FOUND, "Event not found")
        }
        Err(e) => {
            tracing::error!(error = %e, event_id = %id, "failed to retrieve event");
            ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve event")
        }
    }
}
