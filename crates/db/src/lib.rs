//! Document store seam for campus.
//!
//! Handlers never talk to a driver directly: they go through [`DocumentStore`],
//! which is implemented by [`MongoStore`] for real deployments and by
//! [`MemoryStore`] for tests and throwaway local runs.

use async_trait::async_trait;

pub mod error;
pub mod memory;
pub mod mongo;

pub use error::DbError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use mongodb::bson;

use bson::{oid::ObjectId, Document};

/// Result of a `$set` merge against a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Number of documents matching the identifier (0 or 1).
    pub matched: u64,
    /// Number of documents whose stored values actually changed (0 or 1).
    pub modified: u64,
}

/// Single-document operations over named collections.
///
/// Every operation is atomic on its own; nothing here spans documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable backend name for logs.
    fn backend(&self) -> &'static str;

    /// Insert a new document and return the identifier the store assigned to it.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<ObjectId, DbError>;

    async fn find_one(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, DbError>;

    /// Every document in the collection, in the store's natural order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DbError>;

    /// Overwrite only the keys present in `changes` on the document matching `id`.
    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        changes: Document,
    ) -> Result<UpdateOutcome, DbError>;

    /// Remove the document matching `id`, returning how many were removed.
    async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<u64, DbError>;
}

/// Parse a path-supplied identifier, rejecting anything that is not a 24 character hex token.
pub fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_object_id_hex() {
        let id = parse_id("65a1f0c2e4b0a1b2c3d4e5f6").expect("valid id");
        assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn parse_id_rejects_malformed_tokens() {
        for raw in ["", "abc", "65a1f0c2e4b0a1b2c3d4e5f", "65a1f0c2e4b0a1b2c3d4e5fz", "65a1f0c2e4b0a1b2c3d4e5f6a"] {
            assert!(parse_id(raw).is_none(), "{raw} should be rejected");
        }
    }
}
