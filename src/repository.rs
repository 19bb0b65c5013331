//! Typed persistence adapter over one document collection.

use std::{marker::PhantomData, sync::Arc};

use campus_db::{
    bson::{self, oid::ObjectId, Document},
    DbError, DocumentStore, UpdateOutcome,
};
use campus_kernel::AppContext;
use serde::{de::DeserializeOwned, Serialize};

/// Converts between typed values and stored documents for one collection.
///
/// `R` is the stored record shape, including its `_id`.
pub struct Repository<R> {
    store: Arc<dyn DocumentStore>,
    collection: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> Repository<R>
where
    R: DeserializeOwned + Send,
{
    pub fn new(ctx: &AppContext, collection: &'static str) -> Self {
        Self {
            store: ctx.store.clone(),
            collection,
            _record: PhantomData,
        }
    }

    /// Insert `value` and read the stored record back.
    ///
    /// The read-back is a separate operation and may observe a concurrent delete.
    pub async fn insert<T>(&self, value: &T) -> Result<Option<R>, DbError>
    where
        T: Serialize + Sync,
    {
        let document = bson::to_document(value)?;
        let id = self.store.insert_one(self.collection, document).await?;
        self.find(id).await
    }

    pub async fn find(&self, id: ObjectId) -> Result<Option<R>, DbError> {
        self.store
            .find_one(self.collection, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn list(&self) -> Result<Vec<R>, DbError> {
        self.store
            .find_all(self.collection)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Merge the fields `changes` serializes to. Absent fields must serialize to nothing.
    pub async fn update<T>(&self, id: ObjectId, changes: &T) -> Result<UpdateOutcome, DbError>
    where
        T: Serialize + Sync,
    {
        let document = bson::to_document(changes)?;
        self.store.update_one(self.collection, id, document).await
    }

    /// Returns whether a document was removed.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, DbError> {
        Ok(self.store.delete_one(self.collection, id).await? > 0)
    }
}

fn decode<R: DeserializeOwned>(document: Document) -> Result<R, DbError> {
    Ok(bson::from_document(document)?)
}
