use std::collections::HashMap;

use models::Record;

use crate::errors::ServiceError;
use crate::storage::memory_store::MemoryStore;

/// CRUD operations for one record kind over its in-memory store.
///
/// Constructed at startup and injected into the handler set of the owning
/// service; there is no ambient global state. Writes to the same id from
/// concurrent requests are last-completed-wins, a property of the store
/// rather than something this layer serializes away.
#[derive(Clone)]
pub struct ResourceStore<T: Record> {
    store: MemoryStore<String, T>,
}

impl<T: Record> Default for ResourceStore<T> {
    fn default() -> Self {
        Self { store: MemoryStore::new() }
    }
}

impl<T: Record> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert startup records. Seeds are re-inserted on every restart;
    /// nothing survives the process.
    pub async fn seed(&self, records: impl IntoIterator<Item = T>) {
        for record in records {
            self.store.put(record.id().to_string(), record).await;
        }
    }

    /// All records as one keyed mapping; empty mapping when the store is
    /// empty. Never fails.
    pub async fn list(&self) -> HashMap<String, T> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        self.store.get(&id.to_string()).await
    }

    /// Validate and store under the record's own id, silently overwriting
    /// any existing record with that id (create is idempotent-by-overwrite).
    pub async fn create(&self, record: T) -> Result<T, ServiceError> {
        record.validate()?;
        self.store.put(record.id().to_string(), record.clone()).await;
        Ok(record)
    }

    /// Full replacement of an existing record. The path id is
    /// authoritative over whatever id the body carried; validation runs
    /// before the existence check, and the check and the write share one
    /// write lock so concurrent writers cannot interleave between them.
    pub async fn update(&self, id: &str, mut record: T) -> Result<T, ServiceError> {
        record.set_id(id);
        record.validate()?;

        let key = id.to_string();
        let stored = record.clone();
        self.store
            .update_map(move |map| {
                if !map.contains_key(&key) {
                    return Err(ServiceError::not_found(T::KIND));
                }
                map.insert(key, stored);
                Ok(())
            })
            .await?;
        Ok(record)
    }

    /// Remove by id; returns whether the record existed.
    pub async fn delete(&self, id: &str) -> bool {
        self.store.delete(&id.to_string()).await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}
