use axum::{Json, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::shared::core::primitives::{Timestamp, now};

pub const SERVICE_NAME: &str = "Mock WorkOn RBGA API";
/// Version of the mocked WorkOn API, independent of this crate's version.
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: Timestamp,
    pub rbga_operations: Value,
    pub additional_endpoints: Vec<String>,
}

pub async fn handle() -> impl IntoResponse {
    Json(HealthReport {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
        timestamp: now(),
        rbga_operations: json!({
            "1": "PUT /createrequest/create - Create Request",
            "2": "PUT /createdraftrequest/draft - Create Draft Request",
            "3": "GET /status/{request_key} - Get Status",
            "4": "POST /workitemdetails/{request_key} - Get Request Details",
            "5": "POST /workitemattachments/{request_key} - Get Workitem Attachments"
        }),
        additional_endpoints: ["GET /rbga/template", "GET /requests", "GET /health"]
            .map(str::to_string)
            .to_vec(),
    })
}

#[cfg(test)]
mod health_check_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{API_VERSION, HealthReport, SERVICE_NAME, handle};

    #[tokio::test]
    async fn it_should_report_healthy_with_the_operation_catalogue() {
        let response = Router::new()
            .route("/health", get(handle))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let report: HealthReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.service, SERVICE_NAME);
        assert_eq!(report.version, API_VERSION);
        assert_eq!(report.version, "1.0.0");
        assert_eq!(report.rbga_operations.as_object().unwrap().len(), 5);
        assert_eq!(report.additional_endpoints.len(), 3);
    }
}
