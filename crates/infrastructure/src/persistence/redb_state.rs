//! Redb embedded state store
//!
//! Persistent key-value storage for the favorites list and the default
//! city. Uses Redb for ACID-compliant storage without external dependencies.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use application::{error::ApplicationError, ports::StateStore};
use async_trait::async_trait;
use redb::{Database, ReadableDatabase, TableDefinition};
use tracing::{debug, instrument, warn};

/// Table definition for dashboard state entries
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

/// Redb-based persistent state store
///
/// # Auto-Recovery
///
/// If the database file is corrupted or incompatible, the store will
/// automatically delete and recreate the database file. Dashboard state is
/// reconstructible, losing it beats refusing to start.
pub struct RedbStateStore {
    db: Arc<Database>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for RedbStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStateStore")
            .field("db", &"<Database>")
            .field("path", &self.path)
            .finish()
    }
}

impl RedbStateStore {
    /// Create a state store at the specified path
    ///
    /// If the database file exists but is corrupted or incompatible,
    /// it will be deleted and recreated automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened after retry.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ApplicationError> {
        let path_buf = path.as_ref().to_path_buf();

        // Try to open existing database, recreate if corrupted
        let db = match Database::create(&path_buf) {
            Ok(db) => db,
            Err(e) => {
                warn!(
                    path = %path_buf.display(),
                    error = %e,
                    "Database corrupted or incompatible, recreating"
                );
                if path_buf.exists() {
                    fs::remove_file(&path_buf).map_err(|e| {
                        ApplicationError::Storage(format!(
                            "Failed to remove corrupted database: {e}"
                        ))
                    })?;
                }
                Database::create(&path_buf).map_err(|e| {
                    ApplicationError::Storage(format!("Failed to create Redb database: {e}"))
                })?
            },
        };

        Self::ensure_table(&db)?;

        Ok(Self {
            db: Arc::new(db),
            path: Some(path_buf),
        })
    }

    /// Create an in-memory state store (for testing)
    #[cfg(test)]
    pub fn in_memory() -> Result<Self, ApplicationError> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| {
                ApplicationError::Storage(format!("Failed to create in-memory Redb: {e}"))
            })?;

        Self::ensure_table(&db)?;

        Ok(Self {
            db: Arc::new(db),
            path: None,
        })
    }

    /// Create the state table if it doesn't exist yet
    fn ensure_table(db: &Database) -> Result<(), ApplicationError> {
        let write_txn = db.begin_write().map_err(|e| {
            ApplicationError::Storage(format!("Failed to begin write transaction: {e}"))
        })?;
        {
            // Opening the table creates it if it doesn't exist
            let _ = write_txn.open_table(STATE_TABLE).map_err(|e| {
                ApplicationError::Storage(format!("Failed to open state table: {e}"))
            })?;
        }
        write_txn
            .commit()
            .map_err(|e| ApplicationError::Storage(format!("Failed to commit transaction: {e}")))
    }
}

#[async_trait]
impl StateStore for RedbStateStore {
    #[instrument(skip(self), level = "debug")]
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let db = self.db.clone();
        let key = key.to_string();

        // Redb operations are blocking, wrap in spawn_blocking
        let result = tokio::task::spawn_blocking(move || {
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(STATE_TABLE)?;
            Ok::<_, redb::Error>(table.get(key.as_str())?.map(|v| v.value().to_vec()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))?
        .map_err(|e| ApplicationError::Storage(format!("Redb get error: {e}")))?;

        debug!(found = result.is_some(), "State read");
        Ok(result)
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        let db = self.db.clone();
        let key = key.to_string();

        tokio::task::spawn_blocking(move || {
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(STATE_TABLE)?;
                table.insert(key.as_str(), value.as_slice())?;
            }
            write_txn.commit()?;
            Ok::<_, redb::Error>(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))?
        .map_err(|e| ApplicationError::Storage(format!("Redb insert error: {e}")))?;

        debug!("State written");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        let db = self.db.clone();
        let key = key.to_string();

        tokio::task::spawn_blocking(move || {
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(STATE_TABLE)?;
                table.remove(key.as_str())?;
            }
            write_txn.commit()?;
            Ok::<_, redb::Error>(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))?
        .map_err(|e| ApplicationError::Storage(format!("Redb remove error: {e}")))?;

        debug!("State removed");
        Ok(())
    }
}
