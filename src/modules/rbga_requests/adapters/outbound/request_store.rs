use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::rbga_requests::core::attachment::AttachmentRecord;
use crate::modules::rbga_requests::core::request::{NewRequest, RequestRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("request {0} does not exist")]
    UnknownRequest(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestFilter {
    pub status: Option<String>,
    pub pkey: Option<String>,
}

impl RequestFilter {
    /// Empty criteria (`?status=`) do not filter.
    pub fn matches(&self, record: &RequestRecord) -> bool {
        self.status
            .as_deref()
            .filter(|status| !status.is_empty())
            .is_none_or(|status| record.status.label() == status)
            && self
                .pkey
                .as_deref()
                .filter(|pkey| !pkey.is_empty())
                .is_none_or(|pkey| record.pkey == pkey)
    }
}

#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Assigns a key (sequential, or a draft token when `new.is_draft`), stores the
    /// request together with its attachments and returns the stored record.
    async fn create(&self, new: NewRequest) -> Result<RequestRecord, StoreError>;
    async fn get(&self, key: &str) -> Result<Option<RequestRecord>, StoreError>;
    /// Requests matching `filter`, in creation order.
    async fn list(&self, filter: &RequestFilter) -> Result<Vec<RequestRecord>, StoreError>;
}

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn store(
        &self,
        request_key: &str,
        filename: String,
        file: String,
    ) -> Result<AttachmentRecord, StoreError>;
    /// Attachments of `request_key`, in insertion order.
    async fn list_for(&self, request_key: &str) -> Result<Vec<AttachmentRecord>, StoreError>;
    async fn find_by_name_or_id(
        &self,
        request_key: &str,
        name: Option<&str>,
        id: Option<&str>,
    ) -> Result<Option<AttachmentRecord>, StoreError>;
}
