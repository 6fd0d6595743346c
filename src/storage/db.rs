use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, SqlxSqliteConnector,
};
use std::path::Path;
use std::time::Duration;

use crate::config::StorageConfig;
use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::entities::Todo;

const KEEP_CONNECTION: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Local storage manager holding the database connection
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open storage as described by the config
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        match config.resolved_database_path()? {
            Some(path) => Self::open_file(&path).await,
            None => Self::in_memory().await,
        }
    }

    /// Open a throwaway in-memory database
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new(IN_MEMORY_DATABASE_URL);
        // Each SQLite memory connection is its own database, so the pool must
        // hold exactly one connection for the whole lifetime of the storage.
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(KEEP_CONNECTION) // avoid idle reaping
            .max_lifetime(KEEP_CONNECTION) // avoid lifetime rotation
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        debug!("Storage: opened in-memory database");
        Self::from_connection(conn).await
    }

    /// Open (creating if needed) a database file
    pub async fn open_file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
            }
        }

        // Typed options keep paths containing '?' or '%' out of URL parsing
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        info!("Storage: opened database {}", path.display());
        Self::from_connection(conn).await
    }

    /// Wrap an existing connection, creating the schema if missing
    pub async fn from_connection(conn: DatabaseConnection) -> Result<Self> {
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        // Create todos table
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS todos (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    category TEXT,
                    completed BOOLEAN NOT NULL DEFAULT 0
                )
                ",
            )
            .await?;

        self.conn
            .execute_unprepared("CREATE INDEX IF NOT EXISTS idx_todos_category ON todos (category)")
            .await?;

        // Create categories table
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS categories (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    label TEXT NOT NULL UNIQUE
                )
                ",
            )
            .await?;

        Ok(())
    }

    /// Check if the database has any todos
    pub async fn has_data(&self) -> Result<bool> {
        let count = Todo::find().count(&self.conn).await?;
        Ok(count > 0)
    }
}
