use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::modules::rbga_requests::use_cases::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn internal_error(detail: impl std::fmt::Display) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Internal server error: {detail}"),
    )
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(err) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            ApplicationError::RequestNotFound(_) | ApplicationError::AttachmentNotFound => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            ApplicationError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                internal_error(err)
            }
        }
    }
}

pub async fn endpoint_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed for this endpoint",
    )
}

/// Used by the catch-panic layer so a panicking handler still answers with the error shape.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(%detail, "handler panicked");
    internal_error(detail)
}
