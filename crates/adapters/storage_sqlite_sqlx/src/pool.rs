//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:persons.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Whether the URL names a database that lives only as long as its
    /// connections do.
    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    fn pool_options(&self) -> SqlitePoolOptions {
        let options = SqlitePoolOptions::new();
        if self.is_in_memory() {
            // One connection must stay open or the database is dropped.
            options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options
        }
    }

    /// Open the pool, creating the database file if missing, and run all
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, the connection fails,
    /// or a migration fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        let connect = SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = self.pool_options().connect_with(connect).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Database { pool })
    }
}

/// A migrated `SQLite` connection pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
