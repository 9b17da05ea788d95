use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::rbga_requests::core::request::RequestStatus;
use crate::modules::rbga_requests::core::validation::ValidationError;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use crate::shell::state::AppState;

pub const DRAFT_CREATED_MESSAGE: &str = "RBGA draft request created successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftCreatedResponse {
    pub success: bool,
    pub message: String,
    pub key: String,
    pub status: RequestStatus,
    pub created_at: Timestamp,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return ApplicationError::from(ValidationError::MissingBody).into_response(),
    };

    match state.create_draft_handler.handle(&payload).await {
        Ok(record) => {
            tracing::info!(key = %record.key, "draft created");
            (
                StatusCode::CREATED,
                Json(DraftCreatedResponse {
                    success: true,
                    message: DRAFT_CREATED_MESSAGE.to_string(),
                    key: record.key,
                    status: record.status,
                    created_at: record.created_at,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "draft rejected");
            err.into_response()
        }
    }
}
