use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::schema::create_schema;

#[derive(Clone)]
pub struct DatabaseManager {
    db_path: PathBuf,
    pool: Pool<Sqlite>,
}

impl DatabaseManager {
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database at: {}", db_path.display()))?;

        let manager = Self { db_path, pool };

        manager.optimize_for_performance().await?;
        create_schema(manager.pool()).await?;

        info!("Database initialized at: {}", manager.db_path.display());
        Ok(manager)
    }

    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        // Every connection to ":memory:" gets its own database, so the pool
        // must hold exactly one connection and never recycle it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to create in-memory database")?;

        let manager = Self {
            db_path: PathBuf::from(":memory:"),
            pool,
        };

        create_schema(manager.pool()).await?;

        debug!("In-memory database initialized");
        Ok(manager)
    }

    async fn optimize_for_performance(&self) -> Result<()> {
        // WAL mode for better concurrency
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&self.pool)
            .await
            .context("Failed to set WAL mode")?;

        sqlx::query("PRAGMA cache_size = -64000")
            .execute(&self.pool)
            .await
            .context("Failed to set cache size")?;

        sqlx::query("PRAGMA temp_store = MEMORY")
            .execute(&self.pool)
            .await
            .context("Failed to set temp store")?;

        // NORMAL is safe with WAL and much faster than FULL
        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&self.pool)
            .await
            .context("Failed to set synchronous mode")?;

        debug!("Database optimized for performance");
        Ok(())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub async fn close(self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}
