use thiserror::Error;

/// Failures surfaced by a [`crate::DocumentStore`].
#[derive(Error, Debug)]
pub enum DbError {
    #[error("database driver: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    #[error("insert into '{collection}' returned a non-ObjectId identifier")]
    UnexpectedInsertedId { collection: String },
}
