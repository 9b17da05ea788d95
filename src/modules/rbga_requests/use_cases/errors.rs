use thiserror::Error;

use crate::modules::rbga_requests::adapters::outbound::request_store::StoreError;
use crate::modules::rbga_requests::core::validation::ValidationError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request with key {0} not found")]
    RequestNotFound(String),

    #[error("Attachment not found")]
    AttachmentNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
