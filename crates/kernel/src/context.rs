use std::sync::Arc;

use campus_db::{DocumentStore, MemoryStore, MongoStore};

use crate::settings::{DatabaseBackend, DatabaseSettings};

/// Application context handed to every request handler.
///
/// Built once at startup; cloning only bumps the store's reference count.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn DocumentStore>,
}

impl AppContext {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Context over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open the configured backend.
    pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let store: Arc<dyn DocumentStore> = match settings.backend {
            DatabaseBackend::Mongo => {
                Arc::new(MongoStore::connect(&settings.url, &settings.name).await?)
            }
            DatabaseBackend::Memory => Arc::new(MemoryStore::new()),
        };

        tracing::info!(backend = store.backend(), "document store selected");
        Ok(Self::new(store))
    }
}
