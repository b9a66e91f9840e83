//! SQLite-backed durable key-value storage.
//!
//! The ledger persists two opaque JSON blobs (entries, settings); a single
//! `kv_store` table covers that contract while keeping the data in one
//! portable database file.

use rusqlite::{OptionalExtension, params};

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::backend::StorageBackend;

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open the database at `path`, creating the schema if missing.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_schema(&pool)?;
        Ok(Self { pool })
    }
}

pub fn init_schema(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

impl StorageBackend for SqliteStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}
