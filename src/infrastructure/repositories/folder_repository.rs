use crate::infrastructure::db::{DbPool, DbTransaction};
use crate::{domain::folder::Folder, error::AppResult};
use sqlx::PgConnection;
use std::sync::Arc;

pub struct FolderRepository {
    pool: Arc<DbPool>,
}

impl FolderRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Open a transaction; dropping it without commit rolls back
    pub async fn begin(&self) -> AppResult<DbTransaction> {
        Ok(self.pool.begin().await?)
    }

    /// Get all folders in creation order
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let pool = self.pool.as_ref();
        let folders = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, name, created_at
            FROM folders
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(folders)
    }

    /// Fetch a folder and hold a row lock until the transaction ends
    pub async fn lock_by_id(&self, conn: &mut PgConnection, folder_id: i64) -> AppResult<Option<Folder>> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, name, created_at
            FROM folders
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(folder_id)
        .fetch_optional(conn)
        .await?;

        Ok(folder)
    }

    /// Check a folder exists, holding a share lock so it cannot vanish mid-transaction
    pub async fn exists(&self, conn: &mut PgConnection, folder_id: i64) -> AppResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM folders
            WHERE id = $1
            FOR SHARE
            "#,
        )
        .bind(folder_id)
        .fetch_optional(conn)
        .await?;

        Ok(found.is_some())
    }

    pub async fn create(&self, conn: &mut PgConnection, name: &str) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO folders (name, created_at)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(chrono::Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(id)
    }

    /// Rename a folder; false when no row matched
    pub async fn update_name(&self, conn: &mut PgConnection, folder_id: i64, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE folders
            SET name = $1
            WHERE id = $2
            "#,
        )
        .bind(name)
        .bind(folder_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, conn: &mut PgConnection, folder_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM folders
            WHERE id = $1
            "#,
        )
        .bind(folder_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
