use reqwest::StatusCode;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("validation failed")]
    Validation {
        status: StatusCode,
        fields: BTreeMap<String, Vec<String>>,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Validation { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Maps an error-status response body into the taxonomy.
    ///
    /// The backend reports expected failures as `{"error": "..."}` and field
    /// validation failures as `{"field": ["...", ...]}`. Anything else is
    /// surfaced as a generic message for that status.
    pub(crate) fn from_body(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
            if let Some(message) = value.get("error").and_then(|m| m.as_str()) {
                return Self::Api { status, message: message.to_string() };
            }

            if let Some(map) = value.as_object() {
                let fields: BTreeMap<String, Vec<String>> = map
                    .iter()
                    .filter_map(|(k, v)| {
                        let messages: Vec<String> = v
                            .as_array()?
                            .iter()
                            .filter_map(|m| m.as_str().map(String::from))
                            .collect();
                        (!messages.is_empty()).then(|| (k.clone(), messages))
                    })
                    .collect();

                if !fields.is_empty() && status.is_client_error() {
                    return Self::Validation { status, fields };
                }
            }
        }

        let message = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        Self::Api { status, message }
    }
}
