// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod payloads;
pub mod requests;
pub mod state;
