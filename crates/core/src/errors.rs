use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

impl DeskError {
    /// Builds an `Api` error from a non-2xx response body.
    ///
    /// The backend answers failures with `{code, message, timestamp}` (plus
    /// `fieldErrors` on validation failures). The `message` field wins; a body
    /// that is not that shape is used verbatim, and an empty body falls back to
    /// the status reason.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody { message: Some(message), .. }) if !message.is_empty() => message,
            _ if !body.trim().is_empty() => body.trim().to_string(),
            _ => reason
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status)),
        };

        DeskError::Api { status, message }
    }

    /// True for transport failures, where the request never got an answer.
    pub fn is_network(&self) -> bool {
        matches!(self, DeskError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DeskError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error payload produced by the scheduling backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub field_errors: HashMap<String, String>,
}

pub type DeskResult<T> = Result<T, DeskError>;
