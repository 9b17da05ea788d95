use serde::{Deserialize, Serialize};

use crate::modules::rbga_requests::adapters::outbound::request_store::{
    RequestFilter, RequestStore,
};
use crate::modules::rbga_requests::core::request::{RequestRecord, RequestStatus};
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub key: String,
    pub summary: String,
    pub status: RequestStatus,
    pub applicant: String,
    pub created_at: Timestamp,
    pub workflow_stage: String,
}

impl From<RequestRecord> for RequestSummary {
    fn from(record: RequestRecord) -> Self {
        Self {
            key: record.key,
            summary: record.summary,
            status: record.status,
            applicant: record.applicant,
            created_at: record.created_at,
            workflow_stage: record.workflow_stage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestListing {
    pub requests: Vec<RequestSummary>,
    pub count: usize,
}

pub async fn list_requests(
    store: &dyn RequestStore,
    filter: &RequestFilter,
) -> Result<RequestListing, ApplicationError> {
    let requests: Vec<RequestSummary> = store
        .list(filter)
        .await?
        .into_iter()
        .map(RequestSummary::from)
        .collect();
    Ok(RequestListing {
        count: requests.len(),
        requests,
    })
}
