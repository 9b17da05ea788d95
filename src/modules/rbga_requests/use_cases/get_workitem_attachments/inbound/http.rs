use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::rbga_requests::use_cases::get_workitem_attachments::handler::{
    AttachmentQuery, get_workitem_attachments,
};
use crate::shell::extract::optional_json;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(request_key): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let query: AttachmentQuery = match optional_json(&body) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    match get_workitem_attachments(
        state.requests.as_ref(),
        state.attachments.as_ref(),
        &request_key,
        &query,
    )
    .await
    {
        Ok(found) => Json(found).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod get_workitem_attachments_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/workitemattachments/{request_key}", post(handle))
            .with_state(state)
    }

    async fn post_attachments(state: AppState, key: &str, body: Value) -> (StatusCode, Value) {
        let response = app(state)
            .oneshot(
                Request::post(format!("/workitemattachments/{key}"))
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_an_empty_listing_for_send_all_as_a_string() {
        let body = json!({"user": "ntid", "sendAll": "TRUE"});
        let (status, json) = post_attachments(make_seeded_state().await, "RBGA-1", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"attachments": [], "count": 0}));
    }

    #[tokio::test]
    async fn it_should_return_an_empty_listing_for_send_all_as_a_boolean() {
        let body = json!({"sendAll": true});
        let (status, json) = post_attachments(make_seeded_state().await, "RBGA-1", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn it_should_return_404_when_the_named_attachment_is_missing() {
        let body = json!({"user": "ntid", "attachmentName": "offer.pdf"});
        let (status, json) = post_attachments(make_seeded_state().await, "RBGA-1", body).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"error": "Attachment not found"}));
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_request() {
        let body = json!({"sendAll": "true"});
        let (status, json) = post_attachments(make_seeded_state().await, "RBGA-42", body).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Request with key RBGA-42 not found");
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let body = json!({"sendAll": "true"});
        let (status, json) = post_attachments(make_offline_state(), "RBGA-1", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("Internal server error:")
        );
    }
}
