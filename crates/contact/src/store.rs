use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{DocumentId, Record, StoreError};

/// The single capability the forms need from a document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError> {
        (**self).append(collection, record).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: DocumentId,
    pub collection: String,
    pub record: Record,
}

/// In-process store. Used for local runs and as the test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StoredRecord>>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every following append fails until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of append calls, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }

    pub async fn collection(&self, name: &str) -> Vec<Record> {
        self.records
            .read()
            .await
            .iter()
            .filter(|stored| stored.collection == name)
            .map(|stored| stored.record.clone())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".to_owned()));
        }

        let mut records = self.records.write().await;
        let id = DocumentId(format!("{collection}-{}", records.len() + 1));
        records.push(StoredRecord {
            id: id.clone(),
            collection: collection.to_owned(),
            record,
        });

        Ok(id)
    }
}
