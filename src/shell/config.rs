use std::net::SocketAddr;

use thiserror::Error;

pub const HOST_VAR: &str = "WORKON_MOCK_HOST";
pub const PORT_VAR: &str = "WORKON_MOCK_PORT";
pub const SEED_VAR: &str = "WORKON_MOCK_SEED";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{host}:{port} is not a valid listen address")]
    InvalidAddress { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether the sample request RBGA-1 is loaded at startup.
    pub seed_sample: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_sample: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`; unset or blank variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = read(HOST_VAR) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port,
            })?;
        }
        if let Some(seed) = read(SEED_VAR) {
            config.seed_sample = parse_flag(&seed).ok_or(ConfigError::InvalidFlag {
                var: SEED_VAR,
                value: seed,
            })?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
