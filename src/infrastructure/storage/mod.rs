//! Local directory holding synthesized audio files.

use crate::error::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// URL prefix under which stored files are served
pub const AUDIO_URL_PREFIX: &str = "/audio/";

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create audio directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root directory is still present and usable
    pub async fn is_available(&self) -> bool {
        fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Public URL for a stored file name
    pub fn url_for(file_name: &str) -> String {
        format!("{}{}", AUDIO_URL_PREFIX, file_name)
    }

    /// Reduce a stored reference (`/audio/x.mp3`, `x.mp3`) to a bare file name.
    ///
    /// Returns `None` for anything that would resolve outside the root.
    pub fn file_name_of(reference: &str) -> Option<&str> {
        let name = reference
            .strip_prefix(AUDIO_URL_PREFIX)
            .unwrap_or(reference)
            .trim_start_matches('/');

        if name.is_empty()
            || name == "."
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return None;
        }
        Some(name)
    }

    fn resolve(&self, reference: &str) -> AppResult<PathBuf> {
        Self::file_name_of(reference)
            .map(|name| self.root.join(name))
            .ok_or_else(|| AppError::BadRequest(format!("Invalid audio reference: {}", reference)))
    }

    pub async fn write(&self, file_name: &str, data: &[u8]) -> AppResult<()> {
        let path = self.resolve(file_name)?;
        fs::write(&path, data).await.map_err(|e| {
            AppError::Storage(format!("Failed to write audio file {}: {}", file_name, e))
        })?;

        tracing::debug!(file_name, bytes = data.len(), "Wrote audio file");
        Ok(())
    }

    pub async fn exists(&self, reference: &str) -> AppResult<bool> {
        let path = self.resolve(reference)?;
        fs::try_exists(&path).await.map_err(|e| {
            AppError::Storage(format!("Failed to inspect audio file {}: {}", reference, e))
        })
    }

    pub async fn read(&self, reference: &str) -> AppResult<Vec<u8>> {
        let path = self.resolve(reference)?;
        fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::NotFound(format!("Audio file not found: {}", reference))
            } else {
                AppError::Storage(format!("Failed to read audio file {}: {}", reference, e))
            }
        })
    }

    /// Remove a stored file. A file that is already gone is not an error.
    ///
    /// Returns whether a file was actually removed.
    pub async fn delete(&self, reference: &str) -> AppResult<bool> {
        let path = self.resolve(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(reference, "Deleted audio file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(reference, "Audio file already absent");
                Ok(false)
            }
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete audio file {}: {}",
                reference, e
            ))),
        }
    }
}
