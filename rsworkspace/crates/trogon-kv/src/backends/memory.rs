//! In-memory [`KvStore`] backend backed by `Arc<Mutex<HashMap>>`.
//!
//! For tests and local development. Follows the same outcomes as the HTTP
//! backend: a miss is [`KvError::KeyNotFound`], deleting a missing key is not
//! an error, and the store is always healthy.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::KvError;
use crate::store::{KvStore, Record};

/// Thread-safe in-memory record store.
///
/// `Clone` shares state, so clones observe each other's writes.
#[derive(Clone, Default, Debug)]
pub struct MemoryKv {
    inner: Arc<Mutex<HashMap<String, Record>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without `await`.
    pub fn insert(&self, key: impl Into<String>, record: Record) {
        self.records().insert(key.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn records(&self) -> MutexGuard<'_, HashMap<String, Record>> {
        // A panic while holding the lock leaves the map itself intact.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KvStore for MemoryKv {
    type Error = KvError;

    async fn get(&self, key: &str) -> Result<Record, Self::Error> {
        self.records().get(key).cloned().ok_or(KvError::KeyNotFound)
    }

    async fn set(&self, key: &str, record: &Record) -> Result<(), Self::Error> {
        self.records().insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.records().remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
