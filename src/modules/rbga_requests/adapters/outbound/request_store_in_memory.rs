// In memory request and attachment store.
//
// Purpose
// - Back the mock server and its tests without a database.
//
// Responsibilities
// - Keep requests and attachments in insertion order.
// - Generate request keys and insert under one write lock, so concurrent
//   creators never compute the same sequential key.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::rbga_requests::adapters::outbound::request_store::{
    AttachmentStore, RequestFilter, RequestStore, StoreError,
};
use crate::modules::rbga_requests::core::attachment::{self, AttachmentRecord};
use crate::modules::rbga_requests::core::keys::{draft_key, next_key};
use crate::modules::rbga_requests::core::request::{NewRequest, RequestRecord};
use crate::shared::core::primitives::{Timestamp, now};

#[derive(Default)]
struct StoreState {
    requests: IndexMap<String, RequestRecord>,
    attachments: IndexMap<String, AttachmentRecord>,
}

impl StoreState {
    fn insert_attachment(
        &mut self,
        request_key: &str,
        filename: String,
        file: String,
        created_at: Timestamp,
    ) -> AttachmentRecord {
        let record = AttachmentRecord {
            id: Uuid::new_v4().to_string(),
            filename,
            file,
            request_key: request_key.to_string(),
            created_at,
        };
        self.attachments.insert(record.id.clone(), record.clone());
        record
    }

    fn attachments_of<'a>(
        &'a self,
        request_key: &'a str,
    ) -> impl Iterator<Item = &'a AttachmentRecord> + 'a {
        self.attachments
            .values()
            .filter(move |attachment| attachment.request_key == request_key)
    }
}

#[derive(Default)]
pub struct InMemoryRequestStore {
    state: RwLock<StoreState>,
    is_offline: bool,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Inserts a fully formed record under its own key, replacing any previous one.
    pub async fn seed(&self, record: RequestRecord) {
        self.state
            .write()
            .await
            .requests
            .insert(record.key.clone(), record);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Request store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn create(&self, mut new: NewRequest) -> Result<RequestRecord, StoreError> {
        self.ensure_online()?;

        let mut state = self.state.write().await;
        let key = if new.is_draft {
            let mut key = draft_key();
            while state.requests.contains_key(&key) {
                key = draft_key();
            }
            key
        } else {
            next_key(state.requests.keys().map(String::as_str))
        };

        let created_at = new.created_at;
        let attachment_ids = new.attachments.take().map(|attachments| {
            attachments
                .into_iter()
                .map(|a| {
                    state
                        .insert_attachment(&key, a.filename, a.file, created_at)
                        .id
                })
                .collect()
        });

        let record = new.into_record(key, attachment_ids);
        state.requests.insert(record.key.clone(), record.clone());
        tracing::debug!(key = %record.key, draft = record.is_draft, "request stored");
        Ok(record)
    }

    async fn get(&self, key: &str) -> Result<Option<RequestRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.state.read().await.requests.get(key).cloned())
    }

    async fn list(&self, filter: &RequestFilter) -> Result<Vec<RequestRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .state
            .read()
            .await
            .requests
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AttachmentStore for InMemoryRequestStore {
    async fn store(
        &self,
        request_key: &str,
        filename: String,
        file: String,
    ) -> Result<AttachmentRecord, StoreError> {
        self.ensure_online()?;
        let mut state = self.state.write().await;
        if !state.requests.contains_key(request_key) {
            return Err(StoreError::UnknownRequest(request_key.to_string()));
        }
        Ok(state.insert_attachment(request_key, filename, file, now()))
    }

    async fn list_for(&self, request_key: &str) -> Result<Vec<AttachmentRecord>, StoreError> {
        self.ensure_online()?;
        let state = self.state.read().await;
        Ok(state.attachments_of(request_key).cloned().collect())
    }

    async fn find_by_name_or_id(
        &self,
        request_key: &str,
        name: Option<&str>,
        id: Option<&str>,
    ) -> Result<Option<AttachmentRecord>, StoreError> {
        self.ensure_online()?;
        let state = self.state.read().await;
        Ok(attachment::find_by_name_or_id(state.attachments_of(request_key), name, id).cloned())
    }
}
