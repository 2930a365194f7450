//! In-memory test doubles shared by service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::StateStore;

/// In-memory `StateStore` for tests
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// `StateStore` whose writes can be made to fail on demand
///
/// Reads delegate to an inner [`MemoryStateStore`].
#[derive(Debug, Default)]
pub struct FlakyStateStore {
    inner: MemoryStateStore,
    fail_puts: AtomicBool,
}

impl FlakyStateStore {
    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl StateStore for FlakyStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(ApplicationError::Storage("write refused".to_string()));
        }
        self.inner.put(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.inner.remove(key).await
    }
}
