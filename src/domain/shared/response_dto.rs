use serde::{Deserialize, Serialize};

/// Body returned by every successful mutating endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            message: None,
        }
    }

    pub fn created(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::ok()
        }
    }

    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::ok()
        }
    }
}
