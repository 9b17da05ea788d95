use std::sync::Arc;

use crate::modules::rbga_requests::adapters::outbound::request_store::{
    AttachmentStore, RequestStore,
};
use crate::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
use crate::modules::rbga_requests::use_cases::create_draft_request::handler::CreateDraftRequestHandler;
use crate::modules::rbga_requests::use_cases::create_request::handler::CreateRequestHandler;

#[derive(Clone)]
pub struct AppState {
    pub requests: Arc<dyn RequestStore>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub create_handler: Arc<CreateRequestHandler<InMemoryRequestStore>>,
    pub create_draft_handler: Arc<CreateDraftRequestHandler<InMemoryRequestStore>>,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryRequestStore>) -> Self {
        Self {
            requests: store.clone(),
            attachments: store.clone(),
            create_handler: Arc::new(CreateRequestHandler::new(store.clone())),
            create_draft_handler: Arc::new(CreateDraftRequestHandler::new(store)),
        }
    }
}
