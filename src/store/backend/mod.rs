//! Key-value persistence backends
//!
//! Values are strings: stringified numbers or JSON arrays.

mod json;
mod memory;
mod sqlite;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use anyhow::Result;

use crate::config::StorageBackend;

/// A string-keyed, string-valued persistence collaborator
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a single value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write several values at once. Backends override this to make it one write.
    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove every key
    fn clear(&mut self) -> Result<()>;
}

/// Open the configured backend at `path`
pub fn open_store(backend: StorageBackend, path: &Path) -> Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match backend {
        StorageBackend::Json => Box::new(JsonFileStore::open(path)?),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(path)?),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    Ok(store)
}
