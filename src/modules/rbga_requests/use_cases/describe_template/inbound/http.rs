use axum::{Json, response::IntoResponse};

use crate::modules::rbga_requests::core::template::template_description;

pub async fn handle() -> impl IntoResponse {
    Json(template_description())
}
