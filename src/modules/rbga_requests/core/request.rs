use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Draft,
    Submitted,
    #[serde(rename = "In Review")]
    InReview,
    Approved,
    Rejected,
    Closed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Draft => "Draft",
            RequestStatus::Submitted => "Submitted",
            RequestStatus::InReview => "In Review",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalAction {
    pub action: String,
    pub user: String,
    pub comment: String,
    pub timestamp: Timestamp,
}

/// A stored WorkOn request. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub key: String,
    pub summary: String,
    pub pkey: String,
    pub issuetype: String,
    pub applicant: String,
    pub priority: String,
    #[serde(rename = "sourceSystem")]
    pub source_system: String,
    pub data: Map<String, Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub status: RequestStatus,
    pub resolution: Option<String>,
    pub workflow_stage: String,
    pub approvals: Vec<ApprovalAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_ids: Option<Vec<String>>,
    pub is_draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttachment {
    pub filename: String,
    pub file: String,
}

/// Everything a store needs to create a request except its key.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub summary: String,
    pub pkey: String,
    pub issuetype: String,
    pub applicant: String,
    pub priority: String,
    pub source_system: String,
    pub data: Map<String, Value>,
    pub created_at: Timestamp,
    pub status: RequestStatus,
    pub workflow_stage: String,
    pub is_draft: bool,
    /// `None` when the payload declared no attachment list at all.
    pub attachments: Option<Vec<NewAttachment>>,
}

impl NewRequest {
    pub fn into_record(self, key: String, attachment_ids: Option<Vec<String>>) -> RequestRecord {
        RequestRecord {
            key,
            summary: self.summary,
            pkey: self.pkey,
            issuetype: self.issuetype,
            applicant: self.applicant,
            priority: self.priority,
            source_system: self.source_system,
            data: self.data,
            created_at: self.created_at,
            updated_at: self.created_at,
            status: self.status,
            resolution: None,
            workflow_stage: self.workflow_stage,
            approvals: Vec::new(),
            attachment_ids,
            is_draft: self.is_draft,
        }
    }
}
