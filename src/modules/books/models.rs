use campus_db::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

fn available_by_default() -> bool {
    true
}

/// Request model for creating a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i64,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

/// Partial update for a book. Only the fields that are `Some` get written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl BookPatch {
    /// True when no recognized field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.isbn.is_none()
            && self.year.is_none()
            && self.available.is_none()
    }
}

/// Book as stored in the `books` collection.
///
/// `available` may be missing on documents written by other clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i64,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Book as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i64,
    pub available: bool,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            year: record.year,
            available: record.available.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_db::bson::{self, doc};

    #[test]
    fn new_book_is_available_unless_told_otherwise() {
        let book: NewBook =
            serde_json::from_str(r#"{"title": "T", "author": "A", "isbn": "123", "year": 2020}"#)
                .unwrap();
        assert!(book.available);

        let book: NewBook = serde_json::from_str(
            r#"{"title": "T", "author": "A", "isbn": "123", "year": 2020, "available": false}"#,
        )
        .unwrap();
        assert!(!book.available);
    }

    #[test]
    fn new_book_rejects_non_boolean_availability() {
        let parsed = serde_json::from_str::<NewBook>(
            r#"{"title": "T", "author": "A", "isbn": "123", "year": 2020, "available": "yes"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn patch_can_switch_availability_off() {
        let patch: BookPatch = serde_json::from_str(r#"{"available": false}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(bson::to_document(&patch).unwrap(), doc! { "available": false });
    }

    #[test]
    fn record_missing_availability_renders_available() {
        let record: BookRecord = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "title": "T",
            "author": "A",
            "isbn": "123",
            "year": 2020_i64,
        })
        .unwrap();
        assert!(Book::from(record).available);
    }
}
