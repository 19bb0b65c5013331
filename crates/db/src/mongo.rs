//! MongoDB-backed store.

use anyhow::Context;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection, Database,
};

use crate::{DbError, DocumentStore, UpdateOutcome};

/// Store backed by one long-lived MongoDB client shared by all requests.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client for `url` and select database `name`.
    ///
    /// The driver connects lazily, so an unreachable server only shows up on the first operation.
    pub async fn connect(url: &str, name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .with_context(|| "failed to create MongoDB client")?;

        tracing::info!(target: "campus-db", database = name, "MongoDB client ready");

        Ok(Self {
            database: client.database(name),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongo"
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId, DbError> {
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DbError::UnexpectedInsertedId {
                collection: collection.to_string(),
            })
    }

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, DbError> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DbError> {
        let mut cursor = self.collection(collection).find(doc! {}).await?;
        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }
        Ok(documents)
    }

    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        changes: Document,
    ) -> Result<UpdateOutcome, DbError> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, DbError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count)
    }
}
