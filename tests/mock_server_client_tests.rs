// End to end: the mock server on an ephemeral port, driven through the HTTP client.

use std::sync::Arc;

use serde_json::{Value, json};
use workon::client::sample_data::sample_rbga_data;
use workon::client::{ClientConfig, ClientError, WorkOnClient};
use workon::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
use workon::modules::rbga_requests::adapters::outbound::sample_seed::seed_sample_request;
use workon::modules::rbga_requests::core::request::RequestStatus;
use workon::modules::rbga_requests::use_cases::get_workitem_attachments::handler::AttachmentsResponse;
use workon::modules::rbga_requests::use_cases::get_workitem_details::handler::DetailQuery;
use workon::shell::http::router;
use workon::shell::state::AppState;

async fn start_server() -> String {
    let store = Arc::new(InMemoryRequestStore::new());
    seed_sample_request(&store).await;
    let app = router(AppState::in_memory(store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/")
}

async fn client() -> WorkOnClient {
    let config = ClientConfig::new(start_server().await)
        .with_key_id("test-key-id")
        .with_timeout_seconds(5);
    WorkOnClient::new(config).unwrap()
}

#[tokio::test]
async fn it_should_run_the_five_operations_against_the_mock() {
    let client = client().await;
    let data = sample_rbga_data();

    let created = client
        .create_rbga_request("Software licences", "John.Doe", &data, Some("Integration"))
        .await
        .unwrap();
    assert_eq!(created.key, "RBGA-2");

    let draft = client
        .create_draft_rbga_request("Draft licences", "john.doe", &serde_json::Map::new(), None)
        .await
        .unwrap();
    assert!(draft.success);
    assert_eq!(draft.status, RequestStatus::Draft);
    assert!(draft.key.starts_with("RBGA-DRAFT-"));

    let status = client.get_request_status(&created.key).await.unwrap();
    assert_eq!(status.request_key, "RBGA-2");
    assert_eq!(status.status.len(), 5);

    let query = DetailQuery {
        approval_history: Some("yes".into()),
        custom_fields: Some(vec![
            "rbga.field.description".into(),
            "common.field.employee.companycode".into(),
        ]),
        system_fields: Some(vec!["summary".into(), "reporter".into()]),
    };
    let detail = client.get_workitem_detail(&created.key, &query).await.unwrap();
    assert_eq!(detail.status, RequestStatus::Submitted);
    assert_eq!(detail.approval_history, Some(vec![]));
    let custom = detail.custom_fields.unwrap();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom["rbga.field.description"], "Request for new software licenses");

    let all = client
        .get_attachments(&created.key, "john.doe", None, true)
        .await
        .unwrap();
    let AttachmentsResponse::All { attachments, count } = all else {
        panic!("expected the full listing");
    };
    assert_eq!(count, 1);
    assert_eq!(attachments[0].filename, "filename.ext");

    let one = client
        .get_attachments(&created.key, "john.doe", Some("filename.ext"), false)
        .await
        .unwrap();
    assert!(matches!(one, AttachmentsResponse::One { .. }));
}

#[tokio::test]
async fn it_should_read_the_seeded_sample_request() {
    let client = client().await;

    let detail = client
        .get_workitem_detail("RBGA-1", &DetailQuery::default())
        .await
        .unwrap();
    assert_eq!(detail.status, RequestStatus::InReview);
    assert_eq!(
        detail.data.unwrap()["rbga.field.workflowType"],
        Value::from("Parallel")
    );

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn it_should_surface_http_failures_as_status_errors() {
    let client = client().await;

    let missing = client.get_request_status("RBGA-999999").await.unwrap_err();
    assert!(matches!(missing, ClientError::Status { status: 404, .. }));
    assert_eq!(
        missing.server_message().as_deref(),
        Some("Request with key RBGA-999999 not found")
    );

    let mut incomplete = sample_rbga_data();
    incomplete.insert("rbga.field.termCheck".into(), json!("maybe"));
    let rejected = client
        .create_rbga_request("Bad", "john.doe", &incomplete, None)
        .await
        .unwrap_err();
    assert!(matches!(rejected, ClientError::Status { status: 400, .. }));
    assert_eq!(
        rejected.server_message().as_deref(),
        Some("rbga.field.termCheck must be 'yes' or 'no'")
    );

    let no_attachment = client
        .get_attachments("RBGA-1", "john.doe", Some("nope.pdf"), false)
        .await
        .unwrap_err();
    assert!(matches!(no_attachment, ClientError::Status { status: 404, .. }));
}
