use crate::modules::rbga_requests::adapters::outbound::request_store::RequestStore;
use crate::modules::rbga_requests::core::localized_status::StatusResponse;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;

/// The answer only depends on the request existing, not on its stored status.
pub async fn get_status(
    store: &dyn RequestStore,
    key: &str,
) -> Result<StatusResponse, ApplicationError> {
    store
        .get(key)
        .await?
        .ok_or_else(|| ApplicationError::RequestNotFound(key.to_string()))?;
    Ok(StatusResponse::for_request(key))
}
