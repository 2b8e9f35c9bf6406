//! In-memory permit store
//!
//! Holds every permit created since the process started. Nothing is
//! persisted: a restart clears the store.

use tokio::sync::RwLock;

use crate::types::Permit;

/// Append-only, insertion-ordered collection of permit records.
///
/// A single `RwLock` guards the sequence so concurrent creations each
/// append exactly one record; the relative order of two concurrent
/// appends is whatever order they acquire the write lock in.
#[derive(Default)]
pub struct PermitStore {
    permits: RwLock<Vec<Permit>>,
}

impl PermitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence
    pub async fn append(&self, permit: Permit) {
        self.permits.write().await.push(permit);
    }

    /// Return the full sequence in insertion order
    pub async fn list_all(&self) -> Vec<Permit> {
        self.permits.read().await.clone()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.permits.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.permits.read().await.is_empty()
    }
}
