use async_trait::async_trait;
use sqlx::{SqlitePool, prelude::FromRow};
use ulid::Ulid;

use crate::{DocumentId, DocumentStore, Record, StoreError};

/// Applies the `documents` table migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}

#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    pub id: String,
    pub collection: String,
    pub data: String,
    pub created_at: String,
}

impl DocumentRow {
    pub fn json(&self) -> Result<serde_json::Value, StoreError> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

/// Collections stored as JSON documents in one SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Documents of a collection in the order they were appended.
    pub async fn list(&self, collection: &str) -> Result<Vec<DocumentRow>, StoreError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, collection, data, created_at FROM documents WHERE collection = ? ORDER BY rowid",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError> {
        let id = Ulid::new().to_string();
        let data = serde_json::to_string(&record)?;
        let created_at = record.created_at_rfc3339()?;

        sqlx::query("INSERT INTO documents (id, collection, data, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(collection)
            .bind(data)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(DocumentId(id))
    }
}
