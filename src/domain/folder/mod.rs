pub mod error;
pub mod model;
pub mod service;

pub use error::FolderServiceError;
pub use model::Folder;
pub use service::{FolderService, FolderServiceApi};

use crate::domain::audio::AudioSummary;
use serde::{Deserialize, Serialize};

/// Entry of GET /get-folders
#[derive(Debug, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
    pub audios: Vec<AudioSummary>,
}

/// Body of POST /create-folder
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}

/// Body of PUT /edit-folder/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameFolderRequest {
    pub name: Option<String>,
}
