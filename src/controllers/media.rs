use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{error::AppResult, infrastructure::storage::FileStore};

/// GET /audio/{filename} - Serve a stored audio file
pub async fn serve_audio(
    State(file_store): State<Arc<FileStore>>,
    Path(filename): Path<String>,
) -> AppResult<(StatusCode, HeaderMap, Body)> {
    let audio_data = file_store.read(&filename).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio_data.len()));

    Ok((StatusCode::OK, headers, Body::from(audio_data)))
}
