use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::rbga_requests::use_cases::create_draft_request::inbound::http as create_draft_http;
use crate::modules::rbga_requests::use_cases::create_request::inbound::http as create_http;
use crate::modules::rbga_requests::use_cases::describe_template::inbound::http as template_http;
use crate::modules::rbga_requests::use_cases::get_status::inbound::http as status_http;
use crate::modules::rbga_requests::use_cases::get_workitem_attachments::inbound::http as attachments_http;
use crate::modules::rbga_requests::use_cases::get_workitem_details::inbound::http as details_http;
use crate::modules::rbga_requests::use_cases::health_check::inbound::http as health_http;
use crate::modules::rbga_requests::use_cases::list_requests::inbound::http as list_http;
use crate::shell::errors::{endpoint_not_found, method_not_allowed, panic_response};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/createrequest/create", put(create_http::handle))
        .route("/createdraftrequest/draft", put(create_draft_http::handle))
        .route("/status/{request_key}", get(status_http::handle))
        .route("/workitemdetails/{request_key}", post(details_http::handle))
        .route(
            "/workitemattachments/{request_key}",
            post(attachments_http::handle),
        )
        .route("/rbga/template", get(template_http::handle))
        .route("/requests", get(list_http::handle))
        .route("/health", get(health_http::handle))
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
