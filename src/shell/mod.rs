// Composition root for the mock server: configuration, state wiring, routing
// and the mapping of application errors onto HTTP responses.

pub mod config;
pub mod errors;
pub mod extract;
pub mod http;
pub mod state;
