//! SQLite implementation of the RepositoryStore

use crate::config::DatabaseSettings;
use crate::error::StoreError;
use crate::search::{RepositoryRecord, RepositoryStore};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS search_results (
        id           INTEGER PRIMARY KEY NOT NULL,
        name         TEXT NOT NULL,
        description  TEXT CHECK (description IS NULL OR length(description) <= 1024),
        owner_login  TEXT NOT NULL,
        star_count   INTEGER NOT NULL,
        language     TEXT,
        fork_count   INTEGER NOT NULL,
        last_updated TEXT NOT NULL
    )
"#;

const UPSERT: &str = r#"
    INSERT INTO search_results (
        id, name, description, owner_login, star_count, language, fork_count, last_updated
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        description = excluded.description,
        owner_login = excluded.owner_login,
        star_count = excluded.star_count,
        language = excluded.language,
        fork_count = excluded.fork_count,
        last_updated = excluded.last_updated
"#;

/// Repository records kept in a SQLite table keyed by GitHub id
#[derive(Clone)]
pub struct SqliteRepositoryStore {
    pool: SqlitePool,
}

impl SqliteRepositoryStore {
    /// Wrap an existing pool. Call [`Self::migrate`] before use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database described by `settings` and ensure the schema exists
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        info!("Opened repository store at {}", settings.url);
        Ok(store)
    }

    /// Private in-memory database, mainly for tests
    pub async fn in_memory() -> Result<Self, StoreError> {
        // Every SQLite memory connection is its own database, so pin the pool to one
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Create the `search_results` table if it does not exist
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    #[cfg(test)]
    async fn count(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM search_results")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

#[async_trait]
impl RepositoryStore for SqliteRepositoryStore {
    async fn save_all(&self, records: &[RepositoryRecord]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            sqlx::query(UPSERT)
                .bind(record.id)
                .bind(&record.name)
                .bind(&record.description)
                .bind(&record.owner_login)
                .bind(record.star_count)
                .bind(&record.language)
                .bind(record.fork_count)
                .bind(record.last_updated)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        debug!(count = records.len(), "Repositories upserted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<RepositoryRecord>, StoreError> {
        let rows: Vec<RepositoryRecord> = sqlx::query_as(
            r#"
            SELECT id, name, description, owner_login, star_count, language, fork_count, last_updated
            FROM search_results
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::record;

    #[tokio::test]
    async fn test_empty_store() {
        let store = SqliteRepositoryStore::in_memory().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = SqliteRepositoryStore::in_memory().await.unwrap();
        let records = vec![record(2, "beta"), record(1, "alpha")];

        store.save_all(&records).await.unwrap();

        let loaded = store.find_all().await.unwrap();
        assert_eq!(loaded, vec![records[1].clone(), records[0].clone()]);
    }

    #[tokio::test]
    async fn test_resave_overwrites_by_id() {
        let store = SqliteRepositoryStore::in_memory().await.unwrap();
        store.save_all(&[record(1, "tetris")]).await.unwrap();

        let mut updated = record(1, "tetris-renamed");
        updated.star_count = 999;
        updated.description = None;
        store.save_all(&[updated.clone()]).await.unwrap();

        let loaded = store.find_all().await.unwrap();
        assert_eq!(loaded, vec![updated]);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_connect_creates_schema() {
        let settings = DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let store = SqliteRepositoryStore::connect(&settings).await.unwrap();
        store.migrate().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_batch_is_rolled_back() {
        let store = SqliteRepositoryStore::in_memory().await.unwrap();

        let mut too_long = record(2, "verbose");
        too_long.description = Some("x".repeat(1025));
        let result = store.save_all(&[record(1, "fine"), too_long]).await;

        assert!(matches!(result, Err(StoreError::Sqlx(_))));
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
