use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// The `error` field of an `{"error": ...}` body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("error")?
                .as_str()
                .map(str::to_string),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::Config(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}
