use serde_json::{Map, json};

use crate::modules::rbga_requests::core::constants::{
    DEFAULT_SOURCE_SYSTEM, ISSUE_TYPE, PRIORITY, PROJECT_KEY,
};
use crate::modules::rbga_requests::core::request::{NewAttachment, NewRequest, RequestStatus};
use crate::shared::core::primitives::now;

pub struct NewRequestBuilder {
    inner: NewRequest,
}

impl Default for NewRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewRequestBuilder {
    pub fn new() -> Self {
        let data = json!({
            "rbga.field.termCheck": "yes",
            "rbga.field.description": "Stored by the builder",
            "rbga.field.workflowType": "Parallel"
        });
        Self {
            inner: NewRequest {
                summary: "Builder request".to_string(),
                pkey: PROJECT_KEY.to_string(),
                issuetype: ISSUE_TYPE.to_string(),
                applicant: "john.doe".to_string(),
                priority: PRIORITY.to_string(),
                source_system: DEFAULT_SOURCE_SYSTEM.to_string(),
                data: data.as_object().cloned().unwrap_or_default(),
                created_at: now(),
                status: RequestStatus::Submitted,
                workflow_stage: "Initial Review".to_string(),
                is_draft: false,
                attachments: None,
            },
        }
    }

    /// Turns the request into a draft with no data, as the draft endpoint stores it.
    pub fn draft(mut self) -> Self {
        self.inner.is_draft = true;
        self.inner.status = RequestStatus::Draft;
        self.inner.workflow_stage = "Draft".to_string();
        self.inner.data = Map::new();
        self
    }

    pub fn summary(mut self, v: impl Into<String>) -> Self {
        self.inner.summary = v.into();
        self
    }

    pub fn pkey(mut self, v: impl Into<String>) -> Self {
        self.inner.pkey = v.into();
        self
    }

    pub fn attachments(mut self, attachments: Vec<NewAttachment>) -> Self {
        self.inner.attachments = Some(attachments);
        self
    }

    pub fn build(self) -> NewRequest {
        self.inner
    }
}
