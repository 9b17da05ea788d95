use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::rbga_requests::use_cases::get_status::handler::get_status;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(request_key): Path<String>,
) -> impl IntoResponse {
    match get_status(state.requests.as_ref(), &request_key).await {
        Ok(status) => Json(status).into_response(),
        Err(err) => err.into_response(),
    }
}
