use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use workon::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
use workon::modules::rbga_requests::adapters::outbound::sample_seed::seed_sample_request;
use workon::shell::config::ServerConfig;
use workon::shell::http::router;
use workon::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let store = Arc::new(InMemoryRequestStore::new());
    if config.seed_sample {
        seed_sample_request(&store).await;
    }

    let app = router(AppState::in_memory(store));

    tracing::info!("Mock WorkOn RBGA API listening on http://{}", addr);
    tracing::info!("health check: http://{}/health", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
