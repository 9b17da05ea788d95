use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::rbga_requests::adapters::outbound::request_store::RequestFilter;
use crate::modules::rbga_requests::use_cases::list_requests::handler::list_requests;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> impl IntoResponse {
    match list_requests(state.requests.as_ref(), &filter).await {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => err.into_response(),
    }
}
