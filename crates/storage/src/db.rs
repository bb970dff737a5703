use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::Result;

/// Shared handle to the SQLite database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating the file if needed) and pool the database at `url`,
    /// e.g. `sqlite://data.db` or `sqlite::memory:`.
    ///
    /// Foreign keys are enforced on every connection so that ledger rows
    /// can never reference a deleted team, question or judge.
    pub async fn new(url: &str) -> Result<Self> {
        // Writers block on the lock for a while instead of erroring; the
        // registrar opens its transactions with BEGIN IMMEDIATE and relies
        // on this to queue behind a concurrent writer.
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        // An in-memory SQLite database exists per connection; keep a single
        // connection so every caller sees the same schema and data.
        let mut pool_options = SqlitePoolOptions::new();
        if url.contains(":memory:") {
            pool_options = pool_options.max_connections(1);
        }

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
