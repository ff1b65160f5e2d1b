//! Client Errors
//!
//! One taxonomy for every failure a widget can see.

use thiserror::Error;

pub type ClientResult<T> = core::result::Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),
    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    /// Request never completed
    #[error("request failed: {0}")]
    Transport(String),
    /// Response body did not match any known shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
