use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::db::{check_connection, DbPool};
use crate::infrastructure::storage::FileStore;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State((pool, file_store)): State<(Arc<DbPool>, Arc<FileStore>)>,
) -> impl IntoResponse {
    let database_ok = check_connection(&pool).await.is_ok();
    let storage_ok = file_store.is_available().await;

    let status = if database_ok && storage_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ready" } else { "not_ready" },
            "database": if database_ok { "connected" } else { "disconnected" },
            "storage": if storage_ok { "available" } else { "unavailable" }
        })),
    )
}
