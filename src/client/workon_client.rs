use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::modules::rbga_requests::core::constants::{
    DEFAULT_SOURCE_SYSTEM, ISSUE_TYPE, PRIORITY, PROJECT_KEY,
};
use crate::modules::rbga_requests::core::localized_status::StatusResponse;
use crate::modules::rbga_requests::use_cases::create_draft_request::inbound::http::DraftCreatedResponse;
use crate::modules::rbga_requests::use_cases::create_request::inbound::http::CreateRequestResponse;
use crate::modules::rbga_requests::use_cases::get_workitem_attachments::handler::AttachmentsResponse;
use crate::modules::rbga_requests::use_cases::get_workitem_details::handler::{
    DetailQuery, WorkItemDetail,
};
use crate::modules::rbga_requests::use_cases::health_check::inbound::http::HealthReport;

const KEY_ID_HEADER: HeaderName = HeaderName::from_static("keyid");

pub struct WorkOnClient {
    http: Client,
    config: ClientConfig,
}

impl WorkOnClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key_id) = &config.key_id {
            let value = HeaderValue::from_str(key_id)
                .map_err(|err| ClientError::Config(format!("invalid KeyId: {err}")))?;
            headers.insert(KEY_ID_HEADER, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full create; the applicant is sent in lower case.
    pub async fn create_rbga_request(
        &self,
        summary: &str,
        applicant: &str,
        data: &Map<String, Value>,
        source_system: Option<&str>,
    ) -> Result<CreateRequestResponse, ClientError> {
        let payload = rbga_payload(summary, applicant, data, source_system);
        let url = self.config.url("/createrequest/create");
        self.send(self.http.put(url).json(&payload)).await
    }

    pub async fn create_draft_rbga_request(
        &self,
        summary: &str,
        applicant: &str,
        data: &Map<String, Value>,
        source_system: Option<&str>,
    ) -> Result<DraftCreatedResponse, ClientError> {
        let mut payload = rbga_payload(summary, applicant, data, source_system);
        payload.insert("draft".to_string(), Value::Bool(true));
        let url = self.config.url("/createdraftrequest/draft");
        self.send(self.http.put(url).json(&payload)).await
    }

    pub async fn get_request_status(&self, request_key: &str) -> Result<StatusResponse, ClientError> {
        let url = self.config.url(&format!("/status/{request_key}"));
        self.send(self.http.get(url)).await
    }

    pub async fn get_workitem_detail(
        &self,
        request_key: &str,
        query: &DetailQuery,
    ) -> Result<WorkItemDetail, ClientError> {
        let url = self.config.url(&format!("/workitemdetails/{request_key}"));
        self.send(self.http.post(url).json(query)).await
    }

    /// `attachment_name` is only sent when `send_all` is false.
    pub async fn get_attachments(
        &self,
        request_key: &str,
        user: &str,
        attachment_name: Option<&str>,
        send_all: bool,
    ) -> Result<AttachmentsResponse, ClientError> {
        let mut payload = json!({"user": user, "sendAll": send_all.to_string()});
        if let (false, Some(name)) = (send_all, attachment_name) {
            payload["attachmentName"] = Value::String(name.to_string());
        }
        let url = self.config.url(&format!("/workitemattachments/{request_key}"));
        self.send(self.http.post(url).json(&payload)).await
    }

    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        self.send(self.http.get(self.config.url("/health"))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await?;
            tracing::debug!(status = status.as_u16(), %body, "WorkOn call failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

fn rbga_payload(
    summary: &str,
    applicant: &str,
    data: &Map<String, Value>,
    source_system: Option<&str>,
) -> Map<String, Value> {
    let payload = json!({
        "summary": summary,
        "pkey": PROJECT_KEY,
        "issuetype": ISSUE_TYPE,
        "applicant": applicant.to_lowercase(),
        "priority": PRIORITY,
        "sourceSystem": source_system.unwrap_or(DEFAULT_SOURCE_SYSTEM),
        "data": data,
    });
    payload.as_object().cloned().unwrap_or_default()
}
