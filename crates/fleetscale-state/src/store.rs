//! CooldownStore — redb-backed persistence for the last-scale timestamp.
//!
//! A deliberately small store: one table, epoch-second values JSON-encoded
//! into redb's `&[u8]` value column. Supports both on-disk and in-memory
//! backends (the latter for testing).

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase};
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::tables::COOLDOWNS;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Thread-safe cooldown store backed by redb.
#[derive(Clone)]
pub struct CooldownStore {
    db: Arc<Database>,
}

impl CooldownStore {
    /// Open (or create) a persistent cooldown store at the given path.
    pub fn open(path: &Path) -> StateResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "cooldown store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory cooldown store (for testing).
    pub fn open_in_memory() -> StateResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory cooldown store opened");
        Ok(store)
    }

    /// Create the cooldowns table if it doesn't exist yet.
    fn ensure_tables(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        txn.open_table(COOLDOWNS).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    /// Read the last-scale timestamp (epoch seconds) stored under `key`.
    ///
    /// Returns `None` if no scaling action has ever been recorded.
    pub fn last_scale_at(&self, key: &str) -> StateResult<Option<u64>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(COOLDOWNS).map_err(map_err!(Table))?;
        match table.get(key).map_err(map_err!(Read))? {
            Some(guard) => {
                let epoch: u64 =
                    serde_json::from_slice(guard.value()).map_err(map_err!(Deserialize))?;
                Ok(Some(epoch))
            }
            None => Ok(None),
        }
    }

    /// Record `epoch` (seconds) as the last-scale timestamp under `key`,
    /// overwriting any previous value.
    pub fn set_last_scale_at(&self, key: &str, epoch: u64) -> StateResult<()> {
        let value = serde_json::to_vec(&epoch).map_err(map_err!(Serialize))?;
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn.open_table(COOLDOWNS).map_err(map_err!(Table))?;
            table
                .insert(key, value.as_slice())
                .map_err(map_err!(Write))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%key, epoch, "last-scale timestamp recorded");
        Ok(())
    }

    /// Delete the timestamp stored under `key`. Returns true if it existed.
    pub fn clear(&self, key: &str) -> StateResult<bool> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let existed;
        {
            let mut table = txn.open_table(COOLDOWNS).map_err(map_err!(Table))?;
            existed = table.remove(key).map_err(map_err!(Write))?.is_some();
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%key, existed, "cooldown timestamp cleared");
        Ok(existed)
    }
}
