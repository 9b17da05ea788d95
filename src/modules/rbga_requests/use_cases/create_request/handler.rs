use serde_json::{Map, Value};
use std::sync::Arc;

use crate::modules::rbga_requests::adapters::outbound::request_store::RequestStore;
use crate::modules::rbga_requests::core::constants::FIELD_ATTACH;
use crate::modules::rbga_requests::core::request::{
    NewAttachment, NewRequest, RequestRecord, RequestStatus,
};
use crate::modules::rbga_requests::core::validation::validate_full;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::now;

pub const INITIAL_WORKFLOW_STAGE: &str = "Initial Review";

pub struct CreateRequestHandler<TStore>
where
    TStore: RequestStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateRequestHandler<TStore>
where
    TStore: RequestStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, payload: &Value) -> Result<RequestRecord, ApplicationError> {
        let submission = validate_full(payload)?;
        let attachments = declared_attachments(&submission.data);

        let new = NewRequest {
            summary: submission.summary,
            pkey: submission.pkey,
            issuetype: submission.issuetype,
            applicant: submission.applicant,
            priority: submission.priority,
            source_system: submission.source_system,
            data: submission.data,
            created_at: now(),
            status: RequestStatus::Submitted,
            workflow_stage: INITIAL_WORKFLOW_STAGE.to_string(),
            is_draft: false,
            attachments,
        };
        Ok(self.store.create(new).await?)
    }
}

/// Attachments listed under `rbga.field.attach`, when that field is an array.
fn declared_attachments(data: &Map<String, Value>) -> Option<Vec<NewAttachment>> {
    let items = data.get(FIELD_ATTACH)?.as_array()?;
    Some(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| NewAttachment {
                filename: item
                    .get("filename")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("attachment_{index}")),
                file: item
                    .get("file")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect(),
    )
}
