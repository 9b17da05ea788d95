use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::rbga_requests::use_cases::get_workitem_details::handler::{
    DetailQuery, get_workitem_detail,
};
use crate::shell::extract::optional_json;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(request_key): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let query: DetailQuery = match optional_json(&body) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    match get_workitem_detail(state.requests.as_ref(), &request_key, &query).await {
        Ok(detail) => Json(detail).into_response(),
        Err(err) => err.into_response(),
    }
}
