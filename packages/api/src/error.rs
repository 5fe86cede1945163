//! Error type for API calls and decoding of the server's error payload.

use serde::Deserialize;
use thiserror::Error;

/// Message shown when the server did not provide one.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network, DNS, decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("api error ({status}): {detail}")]
    Api { status: u16, detail: String },
}

impl ApiError {
    /// The string the UI shows next to the failed action. Server-provided
    /// `detail` messages pass through verbatim; everything else falls back to
    /// a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { detail, .. } => detail.clone(),
            ApiError::Transport(_) => GENERIC_ERROR.to_string(),
        }
    }
}

/// Error body shape the backend emits: `{ "detail": "..." }`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Extract the user-facing detail from a raw error response body.
pub fn detail_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}
