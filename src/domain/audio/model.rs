use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Audio {
    pub id: i64,
    pub name: String,
    pub file_path: String,
    pub folder_id: i64,
    pub created_at: DateTime<Utc>,
}
