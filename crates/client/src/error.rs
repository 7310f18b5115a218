//! Client error type.

use thiserror::Error;

use assetdesk_core::DomainError;
use assetdesk_inventory::GatewayError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response. `message` comes from the body's `message` field, or
    /// is the raw body when there is none.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection, timeout or other transport failure.
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),

    /// The request was refused before it was sent.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("invalid url: {0}")]
    Url(String),
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a status and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| match v.get("message") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                // Some validators answer with a list of messages.
                Some(serde_json::Value::Array(items)) => Some(
                    items
                        .iter()
                        .filter_map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                _ => None,
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("request failed with status {status}")
                } else {
                    body.to_string()
                }
            });
        ClientError::Api { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let (true, Some(status)) = (e.is_status(), e.status()) {
            ClientError::Api {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<ClientError> for GatewayError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Api { status, message } => GatewayError::Rejected { status, message },
            ClientError::Network(m) | ClientError::Url(m) => GatewayError::Transport(m),
            ClientError::Decode(m) => GatewayError::Decode(m),
            ClientError::Validation(d) => GatewayError::Domain(d),
        }
    }
}
