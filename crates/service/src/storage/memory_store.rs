use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory key-value map store.
///
/// Holds a `HashMap<K, V>` behind a read/write lock and provides the CRUD
/// helpers the record services share. Any number of reads may proceed
/// together; a write excludes every other read and write for its duration,
/// so readers never observe a partially written value. The lock is held
/// only for the single map operation, never across an await on the
/// network. Store lifetime is process lifetime; nothing is persisted.
#[derive(Clone)]
pub struct MemoryStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries as one keyed mapping.
    pub async fn list(&self) -> HashMap<K, V> {
        let map = self.inner.read().await;
        map.clone()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite a value by key.
    pub async fn put(&self, key: K, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key, value);
    }

    /// Remove a key; returns whether it existed.
    pub async fn delete(&self, key: &K) -> bool {
        let mut map = self.inner.write().await;
        map.remove(key).is_some()
    }

    /// Apply a mutation to the underlying map under one write lock. Used
    /// where a check and a write must not interleave with other writers.
    pub async fn update_map<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<(), ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }

    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_crud() {
        let store = MemoryStore::<String, String>::new();

        // initially empty
        assert!(store.is_empty().await);
        assert_eq!(store.get(&"a".into()).await, None);

        // put and get
        store.put("a".into(), "1".into()).await;
        store.put("b".into(), "2".into()).await;
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("1"));
        assert_eq!(store.list().await.len(), 2);

        // overwrite under the same key
        store.put("a".into(), "10".into()).await;
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("10"));
        assert_eq!(store.len().await, 2);

        // delete reports presence
        assert!(store.delete(&"b".into()).await);
        assert!(!store.delete(&"b".into()).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_map_is_atomic_per_closure() {
        let store = MemoryStore::<String, u32>::new();
        store.put("x".into(), 1).await;

        store
            .update_map(|m| {
                let v = m.get_mut("x").expect("present");
                *v += 1;
                Ok(())
            })
            .await
            .expect("update");
        assert_eq!(store.get(&"x".into()).await, Some(2));

        let err = store
            .update_map(|_| Err(ServiceError::not_found("entry")))
            .await
            .expect_err("propagates");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_distinct_writers_lose_nothing() {
        let store = MemoryStore::<String, u32>::new();
        let n = 64;

        let mut tasks = Vec::with_capacity(n);
        for i in 0..n {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.put(format!("key-{i}"), i as u32).await;
            }));
        }
        for t in tasks {
            t.await.expect("join");
        }

        assert_eq!(store.len().await, n);
        for i in 0..n {
            assert_eq!(store.get(&format!("key-{i}")).await, Some(i as u32));
        }
    }

    #[tokio::test]
    async fn concurrent_same_key_writers_leave_one_winner() {
        let store = MemoryStore::<String, u32>::new();
        let n = 64;

        let mut tasks = Vec::with_capacity(n);
        for i in 0..n {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.put("contended".into(), i as u32).await;
            }));
        }
        for t in tasks {
            t.await.expect("join");
        }

        // Last completed write wins; which one is unspecified, but the map
        // holds exactly one entry and it is one of the written values.
        assert_eq!(store.len().await, 1);
        let winner = store.get(&"contended".into()).await.expect("present");
        assert!((winner as usize) < n);
    }
}
