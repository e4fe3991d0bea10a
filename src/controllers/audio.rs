use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::audio::{MoveAudioRequest, RenameAudioRequest, SaveAudioRequest};
use crate::domain::shared::response_dto::MutationResponse;
use crate::infrastructure::http::extract::AppJson;
use crate::{
    domain::audio::{AudioService, AudioServiceApi},
    error::AppResult,
};

pub struct AudioController {
    audio_service: Arc<AudioService>,
}

impl AudioController {
    pub fn new(audio_service: Arc<AudioService>) -> Self {
        Self { audio_service }
    }

    /// POST /save-audio - Record a synthesized clip in a folder
    pub async fn save_audio(
        State(controller): State<Arc<AudioController>>,
        AppJson(request): AppJson<SaveAudioRequest>,
    ) -> AppResult<Json<MutationResponse>> {
        let audio_id = controller.audio_service.save_audio(request).await?;
        Ok(Json(MutationResponse::created(audio_id)))
    }

    /// PUT /edit-audio/{id} - Rename audio
    pub async fn rename_audio(
        State(controller): State<Arc<AudioController>>,
        Path(audio_id): Path<i64>,
        AppJson(request): AppJson<RenameAudioRequest>,
    ) -> AppResult<Json<MutationResponse>> {
        controller
            .audio_service
            .rename_audio(audio_id, request)
            .await?;
        Ok(Json(MutationResponse::ok()))
    }

    /// POST /move-audio - Move audio to another folder
    pub async fn move_audio(
        State(controller): State<Arc<AudioController>>,
        AppJson(request): AppJson<MoveAudioRequest>,
    ) -> AppResult<Json<MutationResponse>> {
        controller.audio_service.move_audio(request).await?;
        Ok(Json(MutationResponse::ok()))
    }

    /// DELETE /delete-audio/{id} - Delete audio and its file
    pub async fn delete_audio(
        State(controller): State<Arc<AudioController>>,
        Path(audio_id): Path<i64>,
    ) -> AppResult<Json<MutationResponse>> {
        controller.audio_service.delete_audio(audio_id).await?;
        Ok(Json(MutationResponse::with_message(
            "Audio deleted successfully",
        )))
    }
}
