use serde_json::Value;
use std::sync::Arc;

use crate::modules::rbga_requests::adapters::outbound::request_store::RequestStore;
use crate::modules::rbga_requests::core::request::{NewRequest, RequestRecord, RequestStatus};
use crate::modules::rbga_requests::core::validation::validate_draft;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::now;

pub const DRAFT_WORKFLOW_STAGE: &str = "Draft";

pub struct CreateDraftRequestHandler<TStore>
where
    TStore: RequestStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateDraftRequestHandler<TStore>
where
    TStore: RequestStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Drafts skip the RBGA data checks and never carry attachments.
    pub async fn handle(&self, payload: &Value) -> Result<RequestRecord, ApplicationError> {
        let submission = validate_draft(payload)?;

        let new = NewRequest {
            summary: submission.summary,
            pkey: submission.pkey,
            issuetype: submission.issuetype,
            applicant: submission.applicant,
            priority: submission.priority,
            source_system: submission.source_system,
            data: submission.data,
            created_at: now(),
            status: RequestStatus::Draft,
            workflow_stage: DRAFT_WORKFLOW_STAGE.to_string(),
            is_draft: true,
            attachments: None,
        };
        Ok(self.store.create(new).await?)
    }
}
