use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{COMPLETED_KEY, CompletionRepository, StorageError};
use lms_core::model::CompletionSet;

use super::SqliteRepository;

#[async_trait]
impl CompletionRepository for SqliteRepository {
    async fn load(&self) -> Result<CompletionSet, StorageError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?1")
            .bind(COMPLETED_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(CompletionSet::new());
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        serde_json::from_str(&value).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save(&self, set: &CompletionSet) -> Result<(), StorageError> {
        let value = serde_json::to_string(set)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value
            ",
        )
        .bind(COMPLETED_KEY)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
