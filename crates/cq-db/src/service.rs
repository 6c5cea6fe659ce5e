//! Service layer hosting every repository method and participant operation.
//!
//! `CqService` wraps `CqDb` (raw database access) together with the selection
//! policy used by the article balancer and the lineage resolver. All repo
//! methods are implemented as `impl CqService` blocks under `repos/`.

use std::time::Duration;

use cq_core::enums::TieBreak;

use crate::CqDb;
use crate::error::DatabaseError;

/// Orchestrates reads and mutations over the cq schema.
///
/// Every multi-statement mutation follows this protocol:
/// 1. Begin an `IMMEDIATE` transaction
/// 2. Validate inputs against current state
/// 3. Execute SQL
/// 4. Commit, or roll back on the first error
pub struct CqService {
    db: CqDb,
    tie_break: TieBreak,
}

impl CqService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path`: Path to the libSQL database file, or `":memory:"` for tests.
    /// * `tie_break`: Tie resolution for the balancer and lineage resolver.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, tie_break: TieBreak) -> Result<Self, DatabaseError> {
        let db = CqDb::open_local(db_path).await?;
        Ok(Self { db, tie_break })
    }

    /// Create a service over a local database with an explicit lock wait.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local_with_busy_timeout(
        db_path: &str,
        tie_break: TieBreak,
        busy_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let db = CqDb::open_local_with_busy_timeout(db_path, busy_timeout).await?;
        Ok(Self { db, tie_break })
    }

    /// Create from an existing `CqDb` (for testing).
    #[must_use]
    pub const fn from_db(db: CqDb, tie_break: TieBreak) -> Self {
        Self { db, tie_break }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CqDb {
        &self.db
    }

    /// Tie resolution applied by selection folds.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Commit `tx` if `result` is `Ok`, otherwise roll it back and return the error.
    pub(crate) async fn finish<T>(
        tx: libsql::Transaction,
        result: Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, %error, "transaction rollback failed");
                }
                Err(error)
            }
        }
    }
}
