//! JSON blob storage — the only persistence the service has.
//!
//! `AppState` holds an `Arc<dyn BlobStore>`: `S3BlobStore` in production,
//! `MemoryBlobStore` in tests and when no bucket is configured.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

mod memory;
mod s3;

pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object store request failed for '{key}': {message}")]
    Backend { key: String, message: String },

    #[error("Blob '{key}' is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode blob '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw key/value object store.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns `None` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All keys starting with `prefix`, in lexical order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// Reads and decodes a JSON blob.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn BlobStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encodes and writes a JSON blob, replacing any previous value.
pub async fn put_json<T: Serialize + Sync>(
    store: &dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.put(key, body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    #[tokio::test]
    async fn test_json_round_trip_through_store() {
        let store = MemoryBlobStore::default();
        let note = Note {
            text: "hello".to_string(),
        };
        put_json(&store, "notes/a.json", &note).await.unwrap();
        let back: Option<Note> = get_json(&store, "notes/a.json").await.unwrap();
        assert_eq!(back, Some(note));
    }

    #[tokio::test]
    async fn test_get_json_missing_key() {
        let store = MemoryBlobStore::default();
        let back: Option<Note> = get_json(&store, "nope.json").await.unwrap();
        assert!(back.is_none());
    }

    #[tokio::test]
    async fn test_get_json_corrupt_blob() {
        let store = MemoryBlobStore::default();
        store.put("bad.json", b"{not json".to_vec()).await.unwrap();
        let err = get_json::<Note>(&store, "bad.json").await.unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }
}
