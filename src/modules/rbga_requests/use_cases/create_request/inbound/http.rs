use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::rbga_requests::core::validation::ValidationError;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRequestResponse {
    pub key: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return ApplicationError::from(ValidationError::MissingBody).into_response(),
    };

    match state.create_handler.handle(&payload).await {
        Ok(record) => {
            tracing::info!(key = %record.key, "request created");
            (
                StatusCode::CREATED,
                Json(CreateRequestResponse { key: record.key }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "request rejected");
            err.into_response()
        }
    }
}
