//! State store port definition
//!
//! Defines the interface for the local key-value persistence that backs the
//! favorites list and the default city. Values are stored as raw bytes;
//! callers handle serialization via [`StateStoreExt`].

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Key-value persistence port for durable dashboard state
#[async_trait]
pub trait StateStore: Send + Sync + std::fmt::Debug {
    /// Get a stored value by key
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Store a value under a key, replacing any previous value
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError>;

    /// Delete a key (absent keys are not an error)
    async fn remove(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Extension trait for typed state operations
///
/// Provides convenient serde-JSON get/put on top of the raw byte interface.
#[async_trait]
pub trait StateStoreExt: StateStore {
    /// Get a typed value from the store
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Internal` when the stored bytes exist but
    /// fail to deserialize; callers decide whether that degrades to "absent".
    async fn get_json<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes).map_err(|e| {
                    ApplicationError::Internal(format!("State deserialization error: {e}"))
                })?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// Store a typed value as JSON
    async fn put_json<T>(&self, key: &str, value: &T) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Internal(format!("State serialization error: {e}")))?;
        self.put(key, bytes).await
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}
