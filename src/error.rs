//! Error Types
//!
//! Decode and fetch failures. Both end up as the text of the error banner.

use thiserror::Error;

/// Payload did not match the portfolio JSON contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Syntax(String),

    #[error("{at}: missing required field `{field}` (expected {expected})")]
    MissingField {
        at: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{at}: expected {expected}")]
    WrongType { at: String, expected: &'static str },
}

/// Portfolio fetch failed in transport or in decoding
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("unexpected payload: {0}")]
    Decode(#[from] DecodeError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}
