use std::sync::Arc;

use crate::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
use crate::modules::rbga_requests::adapters::outbound::sample_seed::seed_sample_request;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(InMemoryRequestStore::new()))
}

/// State whose store fails every operation, for exercising the 500 path.
pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRequestStore::new();
    store.toggle_offline();
    AppState::in_memory(Arc::new(store))
}

/// State holding the sample request RBGA-1.
pub async fn make_seeded_state() -> AppState {
    let store = InMemoryRequestStore::new();
    seed_sample_request(&store).await;
    AppState::in_memory(Arc::new(store))
}
