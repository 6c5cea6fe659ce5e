//! # cq-db
//!
//! libSQL database operations for cq.
//!
//! Handles all relational state: users and profiles, researches with their
//! articles, sentences and questions, and the take / milestone / response
//! hierarchy participants produce. Also hosts the participant-facing
//! operations built on that state: article balancing on registration,
//! milestone lineage resolution, milestone renewal, and seeded take creation.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use error::DatabaseError;
use libsql::{Builder, TransactionBehavior};

/// How long a writer waits for another connection's lock before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `SQLITE_BUSY` primary result code.
const SQLITE_BUSY: i32 = 5;

/// Central database handle for all cq state operations.
///
/// Wraps a libSQL database and a single connection. Repository methods live on
/// [`service::CqService`], which owns one of these.
pub struct CqDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    busy_timeout: Duration,
}

impl CqDb {
    /// Open a local database at the given path, or `":memory:"`, waiting up
    /// to [`DEFAULT_BUSY_TIMEOUT`] for locks held by other connections.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT).await
    }

    /// Open a local database with an explicit lock wait.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local_with_busy_timeout(
        path: &str,
        busy_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        conn.busy_timeout(busy_timeout)?;

        let cq_db = Self {
            db,
            conn,
            busy_timeout,
        };
        cq_db.run_migrations().await?;
        tracing::debug!(path, ?busy_timeout, "opened cq database");
        Ok(cq_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a query on the shared connection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        tracing::trace!(sql, "query");
        Ok(self.conn.query(sql, params).await?)
    }

    /// Execute a statement on the shared connection, returning affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, DatabaseError> {
        tracing::trace!(sql, "execute");
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Begin an `IMMEDIATE` transaction on the shared connection.
    ///
    /// The write lock is taken before the first read, so read-then-write
    /// sequences (balancing, lineage seeding) cannot interleave with another
    /// writer on the same database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Busy` if another connection keeps the write lock
    /// past the busy timeout, or `DatabaseError::LibSql` for other failures.
    pub async fn begin_immediate(&self) -> Result<libsql::Transaction, DatabaseError> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await
            .map_err(|error| match error {
                libsql::Error::SqliteFailure(code, _) if code & 0xff == SQLITE_BUSY => {
                    DatabaseError::Busy {
                        waited: self.busy_timeout,
                    }
                }
                other => other.into(),
            })
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tak-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
