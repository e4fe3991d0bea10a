pub mod error;
pub mod model;
pub mod service;

pub use error::AudioServiceError;
pub use model::Audio;
pub use service::{AudioService, AudioServiceApi};

use crate::domain::shared::validation::IdInput;
use serde::{Deserialize, Serialize};

/// Audio entry nested under a folder listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSummary {
    pub id: i64,
    pub name: String,
    pub file_path: String,
}

impl From<Audio> for AudioSummary {
    fn from(audio: Audio) -> Self {
        Self {
            id: audio.id,
            name: audio.name,
            file_path: audio.file_path,
        }
    }
}

/// Body of POST /save-audio; ids may arrive as numbers or numeric strings
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAudioRequest {
    pub name: Option<String>,
    pub audio_path: Option<String>,
    pub folder_id: Option<IdInput>,
}

/// Body of PUT /edit-audio/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameAudioRequest {
    pub name: Option<String>,
}

/// Body of POST /move-audio
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAudioRequest {
    pub audio_id: Option<IdInput>,
    pub target_folder_id: Option<IdInput>,
}
