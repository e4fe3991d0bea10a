use crate::infrastructure::db::{DbPool, DbTransaction};
use crate::{
    domain::audio::Audio,
    error::{AppError, AppResult},
};
use sqlx::PgConnection;
use std::sync::Arc;

pub struct AudioRepository {
    pool: Arc<DbPool>,
}

/// Turn a dangling `folder_id` reference into NotFound
fn map_folder_reference(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound("Folder not found".to_string());
        }
    }
    AppError::Database(e)
}

impl AudioRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn begin(&self) -> AppResult<DbTransaction> {
        Ok(self.pool.begin().await?)
    }

    /// Get all audios grouped by folder
    pub async fn find_all(&self) -> AppResult<Vec<Audio>> {
        let pool = self.pool.as_ref();
        let audios = sqlx::query_as::<_, Audio>(
            r#"
            SELECT id, name, file_path, folder_id, created_at
            FROM audios
            ORDER BY folder_id, id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(audios)
    }

    pub async fn lock_by_id(&self, conn: &mut PgConnection, audio_id: i64) -> AppResult<Option<Audio>> {
        let audio = sqlx::query_as::<_, Audio>(
            r#"
            SELECT id, name, file_path, folder_id, created_at
            FROM audios
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(audio_id)
        .fetch_optional(conn)
        .await?;

        Ok(audio)
    }

    /// Lock every audio owned by a folder
    pub async fn lock_by_folder(&self, conn: &mut PgConnection, folder_id: i64) -> AppResult<Vec<Audio>> {
        let audios = sqlx::query_as::<_, Audio>(
            r#"
            SELECT id, name, file_path, folder_id, created_at
            FROM audios
            WHERE folder_id = $1
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(folder_id)
        .fetch_all(conn)
        .await?;

        Ok(audios)
    }

    pub async fn create(
        &self,
        conn: &mut PgConnection,
        name: &str,
        file_path: &str,
        folder_id: i64,
    ) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO audios (name, file_path, folder_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(file_path)
        .bind(folder_id)
        .bind(chrono::Utc::now())
        .fetch_one(conn)
        .await
        .map_err(map_folder_reference)?;

        Ok(id)
    }

    pub async fn update_name(&self, conn: &mut PgConnection, audio_id: i64, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE audios
            SET name = $1
            WHERE id = $2
            "#,
        )
        .bind(name)
        .bind(audio_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reassign an audio to another folder
    pub async fn update_folder(
        &self,
        conn: &mut PgConnection,
        audio_id: i64,
        folder_id: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE audios
            SET folder_id = $1
            WHERE id = $2
            "#,
        )
        .bind(folder_id)
        .bind(audio_id)
        .execute(conn)
        .await
        .map_err(map_folder_reference)?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, conn: &mut PgConnection, audio_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM audios
            WHERE id = $1
            "#,
        )
        .bind(audio_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_folder(&self, conn: &mut PgConnection, folder_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM audios
            WHERE folder_id = $1
            "#,
        )
        .bind(folder_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }
}
