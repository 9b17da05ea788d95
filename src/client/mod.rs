// HTTP client for the WorkOn RBGA API, usable against the mock server or the real service.

pub mod config;
pub mod error;
pub mod sample_data;
pub mod workon_client;

pub use config::ClientConfig;
pub use error::ClientError;
pub use workon_client::WorkOnClient;
