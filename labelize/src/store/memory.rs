//! In-memory record store implementation.
//!
//! This module provides a simple thread-safe, process-local record store
//! that implements the [`RecordStore`] trait. It is primarily intended for
//! testing and prototyping, where a shared in-memory map is sufficient.
//!
//! # Examples
//!
//! ```
//! # use labelize::store::memory::MemoryStore;
//! # use labelize::{Identifier, LabelTarget, RecordStore};
//! #
//! #[derive(Debug, Clone, PartialEq)]
//! struct Employee {
//!     id: i64,
//! }
//!
//! impl LabelTarget for Employee {
//!     fn primary_key(&self) -> Identifier {
//!         Identifier::from(self.id)
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryStore::new();
//! store.insert(Employee { id: 1 }).await;
//!
//! let found = store.find(&Identifier::from(1)).await.unwrap();
//! assert_eq!(found, Some(Employee { id: 1 }));
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::store::RecordStore;
use crate::{Identifier, LabelTarget, Result};

/// An in-memory record store.
///
/// Records are keyed by their [`LabelTarget::primary_key`]. Cloning the
/// store yields a handle to the same records.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<Mutex<HashMap<Identifier, T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<T: LabelTarget + Clone> MemoryStore<T> {
    /// Creates a new, empty `MemoryStore`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the record it replaced, if any.
    pub async fn insert(&self, record: T) -> Option<T> {
        let mut records = self.records.lock().await;
        records.insert(record.primary_key(), record)
    }

    /// Removes the record with the given identifier, returning it.
    pub async fn remove(&self, id: &Identifier) -> Option<T> {
        let mut records = self.records.lock().await;
        records.remove(id)
    }

    /// Returns the number of records in the store.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Removes all records.
    pub async fn clear(&self) {
        self.records.lock().await.clear();
    }
}

#[async_trait]
impl<T: LabelTarget + Clone> RecordStore<T> for MemoryStore<T> {
    async fn find(&self, id: &Identifier) -> Result<Option<T>> {
        let records = self.records.lock().await;
        Ok(records.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Employee {
        id: &'static str,
    }

    impl LabelTarget for Employee {
        fn primary_key(&self) -> Identifier {
            Identifier::from(self.id)
        }
    }

    #[tokio::test]
    async fn insert_and_find() {
        let store = MemoryStore::new();
        store.insert(Employee { id: "e1" }).await;

        let found = store.find(&Identifier::from("e1")).await.unwrap();
        assert_eq!(found, Some(Employee { id: "e1" }));
    }

    #[tokio::test]
    async fn find_missing() {
        let store = MemoryStore::<Employee>::new();

        let found = store.find(&Identifier::from("e1")).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn insert_replaces() {
        let store = MemoryStore::new();

        assert_eq!(store.insert(Employee { id: "e1" }).await, None);
        assert_eq!(
            store.insert(Employee { id: "e1" }).await,
            Some(Employee { id: "e1" })
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove() {
        let store = MemoryStore::new();
        store.insert(Employee { id: "e1" }).await;

        let removed = store.remove(&Identifier::from("e1")).await;

        assert_eq!(removed, Some(Employee { id: "e1" }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clear() {
        let store = MemoryStore::new();
        store.insert(Employee { id: "e1" }).await;
        store.insert(Employee { id: "e2" }).await;
        assert_eq!(store.len().await, 2);

        store.clear().await;

        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.insert(Employee { id: "e1" }).await;

        assert_eq!(store.len().await, 1);
    }
}
