use serde::{Deserialize, Serialize};

/// Entity id as sent by clients: a JSON number or a numeric string (`"3"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl From<i64> for IdInput {
    fn from(id: i64) -> Self {
        IdInput::Number(id)
    }
}

/// Return the trimmed value of a required text field, or a message naming the field.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{} is required", field)),
    }
}

pub fn required_id(value: Option<IdInput>, field: &str) -> Result<i64, String> {
    match value {
        Some(IdInput::Number(id)) => Ok(id),
        Some(IdInput::Text(text)) if text.trim().is_empty() => Err(format!("{} is required", field)),
        Some(IdInput::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| format!("{} must be an integer id, got '{}'", field, text)),
        None => Err(format!("{} is required", field)),
    }
}
