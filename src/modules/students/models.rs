use campus_db::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Request model for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub course: String,
    /// Optional; `null` is treated the same as leaving it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Partial update for a student. Only the fields that are `Some` get written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl StudentPatch {
    /// True when no recognized field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.email.is_none()
            && self.course.is_none()
            && self.grade.is_none()
    }
}

/// Student as stored in the `students` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub course: String,
    #[serde(default)]
    pub grade: Option<String>,
}

/// Student as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Hex rendering of the stored identifier
    pub id: String,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub course: String,
    /// Empty when the student has no grade yet
    pub grade: String,
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            name: record.name,
            age: record.age,
            email: record.email,
            course: record.course,
            grade: record.grade.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_db::bson::{self, doc};

    #[test]
    fn patch_with_only_nulls_is_empty() {
        let patch: StudentPatch =
            serde_json::from_str(r#"{"grade": null, "nickname": "x"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_writes_only_supplied_fields() {
        let patch: StudentPatch = serde_json::from_str(r#"{"grade": "A", "age": 21}"#).unwrap();
        assert!(!patch.is_empty());

        let changes = bson::to_document(&patch).unwrap();
        assert_eq!(changes, doc! { "age": 21_i64, "grade": "A" });
    }

    #[test]
    fn new_student_rejects_wrong_primitive_types() {
        let err = serde_json::from_str::<NewStudent>(
            r#"{"name": "Ana", "age": "20", "email": "a@x.com", "course": "CS"}"#,
        );
        assert!(err.is_err());

        let err = serde_json::from_str::<NewStudent>(r#"{"name": "Ana", "age": 20}"#);
        assert!(err.is_err());
    }

    #[test]
    fn record_without_grade_renders_empty_grade() {
        let id = ObjectId::new();
        let record: StudentRecord = bson::from_document(doc! {
            "_id": id,
            "name": "Ana",
            "age": 20_i32,
            "email": "a@x.com",
            "course": "CS",
        })
        .unwrap();

        let student = Student::from(record);
        assert_eq!(student.id, id.to_hex());
        assert_eq!(student.age, 20);
        assert_eq!(student.grade, "");
    }
}
