#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use tasky_contact::{
    DocumentId, DocumentStore, FormController, FormKind, MemoryStore, Record, StoreError,
};
use tokio::sync::{Notify, Semaphore};

/// Holds every append until the test opens the gate.
pub struct GatedStore {
    pub inner: MemoryStore,
    started: Notify,
    release: Semaphore,
}

impl Default for GatedStore {
    fn default() -> Self {
        Self {
            inner: MemoryStore::new(),
            started: Notify::new(),
            release: Semaphore::new(0),
        }
    }
}

impl GatedStore {
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn open(&self) {
        self.release.add_permits(1);
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError> {
        self.started.notify_one();
        let _permit = self
            .release
            .acquire()
            .await
            .map_err(|_| StoreError::Unavailable("gate closed".to_owned()))?;

        self.inner.append(collection, record).await
    }
}

pub fn fill<S: DocumentStore>(controller: &FormController<S>, values: &[(&str, &str)]) {
    for (name, value) in values {
        controller.update_field(name, *value);
    }
}

pub fn contact_form(store: MemoryStore) -> FormController<MemoryStore> {
    FormController::new(FormKind::Contact, store)
}

pub async fn setup_sqlite(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    tasky_contact::sqlite::migrate(&pool).await?;

    Ok(pool)
}
