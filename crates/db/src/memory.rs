//! In-process store with the same counting semantics as MongoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use crate::{DbError, DocumentStore, UpdateOutcome};

const ID_KEY: &str = "_id";

/// Collections kept as insertion-ordered vectors behind one lock.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id(ID_KEY).is_ok_and(|stored| stored == *id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId, DbError> {
        let id = ObjectId::new();
        let mut stored = Document::new();
        stored.insert(ID_KEY, id);
        for (key, value) in document {
            if key != ID_KEY {
                stored.insert(key, value);
            }
        }

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|document| has_id(document, &id)))
            .cloned())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        changes: Document,
    ) -> Result<UpdateOutcome, DbError> {
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|document| has_id(document, &id)))
        else {
            return Ok(UpdateOutcome::default());
        };

        let mut changed = false;
        for (key, value) in changes {
            if key == ID_KEY {
                continue;
            }
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, DbError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match documents.iter().position(|document| has_id(document, &id)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
