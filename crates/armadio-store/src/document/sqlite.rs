use crate::document::batch::{WriteBatch, WriteOp};
use crate::document::paths;
use crate::document::store::DocumentStore;
use crate::{Result as StoreErrorResult, StoreError};

use std::panic::Location;
use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};

/// SQLite-backed [`DocumentStore`]: one `documents` row per document,
/// shallow top-level merges, batches committed in a single transaction.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the store at the given file and run migrations.
    pub async fn connect(path: &Path) -> StoreErrorResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    /// In-memory store, used by tests and offline sessions.
    pub async fn in_memory() -> StoreErrorResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);
        // In-memory databases exist per connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(pool: &SqlitePool) -> StoreErrorResult<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }

    #[track_caller]
    fn decode(path: &str, raw: &str) -> StoreErrorResult<Map<String, Value>> {
        match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(map) => Ok(map),
            Err(source) => {
                log::warn!("[docstore] corrupt document at {path}");
                Err(StoreError::Serialization {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    async fn read_fields(
        conn: &mut SqliteConnection,
        path: &str,
    ) -> StoreErrorResult<Option<Map<String, Value>>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM documents WHERE path = ?")
                .bind(path)
                .fetch_optional(&mut *conn)
                .await?;

        match row {
            Some((raw,)) => Ok(Some(Self::decode(path, &raw)?)),
            None => Ok(None),
        }
    }

    async fn set_merge_on(
        conn: &mut SqliteConnection,
        path: &str,
        fields: Map<String, Value>,
    ) -> StoreErrorResult<()> {
        let now = Utc::now().timestamp();

        match Self::read_fields(&mut *conn, path).await? {
            Some(mut existing) => {
                merge_fields(&mut existing, fields);
                let data = serde_json::to_string(&Value::Object(existing))?;
                sqlx::query("UPDATE documents SET data = ?, updated_at = ? WHERE path = ?")
                    .bind(data)
                    .bind(now)
                    .bind(path)
                    .execute(&mut *conn)
                    .await?;
            }
            None => {
                let (collection, _) = paths::split(path);
                let data = serde_json::to_string(&Value::Object(fields))?;
                sqlx::query(
                    r#"
                        INSERT INTO documents (path, collection, data, created_at, updated_at)
                        VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(path)
                .bind(collection)
                .bind(data)
                .bind(now)
                .bind(now)
                .execute(&mut *conn)
                .await?;
            }
        }

        Ok(())
    }

    async fn delete_on(conn: &mut SqliteConnection, path: &str) -> StoreErrorResult<()> {
        sqlx::query("DELETE FROM documents WHERE path = ?")
            .bind(path)
            .execute(conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, path: &str) -> StoreErrorResult<Option<Map<String, Value>>> {
        let mut conn = self.pool.acquire().await?;
        Self::read_fields(&mut *conn, path).await
    }

    async fn update(&self, path: &str, fields: Map<String, Value>) -> StoreErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        let Some(mut existing) = Self::read_fields(&mut *tx, path).await? else {
            return Err(StoreError::DocumentNotFound {
                path: path.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        merge_fields(&mut existing, fields);
        let data = serde_json::to_string(&Value::Object(existing))?;
        sqlx::query("UPDATE documents SET data = ?, updated_at = ? WHERE path = ?")
            .bind(data)
            .bind(Utc::now().timestamp())
            .bind(path)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn set_merge(&self, path: &str, fields: Map<String, Value>) -> StoreErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        Self::set_merge_on(&mut *tx, path, fields).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> StoreErrorResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for op in batch.into_ops() {
            match op {
                WriteOp::SetMerge { path, fields } => {
                    Self::set_merge_on(&mut *tx, &path, fields).await?;
                }
                WriteOp::Delete { path } => {
                    Self::delete_on(&mut *tx, &path).await?;
                }
            }
        }
        tx.commit().await?;
        Ok(())
    }

    async fn list_collection(
        &self,
        collection: &str,
    ) -> StoreErrorResult<Vec<(String, Map<String, Value>)>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT path, data FROM documents WHERE collection = ? ORDER BY path")
                .bind(collection)
                .fetch_all(&self.pool)
                .await?;

        let mut out = Vec::with_capacity(rows.len());
        for (path, raw) in rows {
            let (_, id) = paths::split(&path);
            out.push((id.to_string(), Self::decode(&path, &raw)?));
        }
        Ok(out)
    }

    async fn collection_is_empty(&self, collection: &str) -> StoreErrorResult<bool> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM documents WHERE collection = ? LIMIT 1")
                .bind(collection)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_none())
    }
}

/// Shallow merge: each incoming top-level field replaces the existing one.
fn merge_fields(existing: &mut Map<String, Value>, fields: Map<String, Value>) {
    for (key, value) in fields {
        existing.insert(key, value);
    }
}
