//! Object-store seam.
//!
//! The production implementation lives with the hosting infrastructure and
//! is injected by the caller; signed-URL issuance and retention policy are
//! its concern, not the worker's.

use std::collections::HashMap;
use std::sync::Mutex;

/// Destination for serialized meshes.
pub trait ObjectStore {
    fn put(&self, key: &str, bytes: &[u8], content_type: &str)
        -> Result<StoredObject, StoreError>;
}

/// Receipt for a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub size_bytes: usize,
}

/// Errors from the storage collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("object store rejected {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// In-memory store: deterministic test double for the storage seam.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("memory store lock")
            .get(key)
            .map(|(_, bytes)| bytes.clone())
    }

    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .lock()
            .expect("memory store lock")
            .get(key)
            .map(|(ct, _)| ct.clone())
    }

    pub fn len(&self) -> usize {
        self.objects.lock().expect("memory store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    fn put(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<StoredObject, StoreError> {
        let mut objects = self.objects.lock().expect("memory store lock");
        objects.insert(key.to_string(), (content_type.to_string(), bytes.to_vec()));
        Ok(StoredObject {
            key: key.to_string(),
            size_bytes: bytes.len(),
        })
    }
}
