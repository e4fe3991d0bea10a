use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::translation::{
        TranslateRequest, TranslateResponse, TranslationService, TranslationServiceApi,
    },
    error::AppResult,
    infrastructure::http::extract::AppJson,
};

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /translate - Translate a script and synthesize audio per language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        AppJson(request): AppJson<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let results = controller
            .translation_service
            .translate_and_synthesize(request)
            .await?;
        Ok(Json(TranslateResponse { results }))
    }
}
