use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use campus_db::{bson::oid::ObjectId, parse_id};
use campus_http::{AppError, ValidatedJson};
use campus_kernel::AppContext;

use super::models::{NewStudent, Student, StudentPatch, StudentRecord};
use crate::{modules::Deleted, repository::Repository};

pub(crate) const COLLECTION: &str = "students";

fn students(ctx: &AppContext) -> Repository<StudentRecord> {
    Repository::new(ctx, COLLECTION)
}

/// Path segments that fail to decode (e.g. invalid UTF-8) are malformed identifiers too.
fn student_id(raw: Result<Path<String>, PathRejection>) -> Result<ObjectId, AppError> {
    raw.ok()
        .and_then(|Path(raw)| parse_id(&raw))
        .ok_or_else(|| AppError::bad_request("Invalid student ID"))
}

fn not_found() -> AppError {
    AppError::not_found("Student not found")
}

pub(crate) async fn create_student(
    State(ctx): State<AppContext>,
    ValidatedJson(student): ValidatedJson<NewStudent>,
) -> Result<Json<Student>, AppError> {
    let created = students(&ctx)
        .insert(&student)
        .await?
        .ok_or_else(|| AppError::internal("created student could not be read back"))?;

    tracing::debug!(id = %created.id, "student created");
    Ok(Json(created.into()))
}

pub(crate) async fn list_students(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<Student>>, AppError> {
    let records = students(&ctx).list().await?;
    Ok(Json(records.into_iter().map(Student::from).collect()))
}

pub(crate) async fn get_student(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Student>, AppError> {
    let id = student_id(raw_id)?;
    let record = students(&ctx).find(id).await?.ok_or_else(not_found)?;
    Ok(Json(record.into()))
}

pub(crate) async fn update_student(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
    ValidatedJson(patch): ValidatedJson<StudentPatch>,
) -> Result<Json<Student>, AppError> {
    if patch.is_empty() {
        return Err(AppError::bad_request("No data to update"));
    }
    let id = student_id(raw_id)?;

    let repo = students(&ctx);
    let outcome = repo.update(id, &patch).await?;
    if outcome.matched == 0 {
        return Err(not_found());
    }
    if outcome.modified == 0 {
        tracing::debug!(%id, "student update changed nothing");
    }

    let record = repo.find(id).await?.ok_or_else(not_found)?;
    Ok(Json(record.into()))
}

pub(crate) async fn delete_student(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Deleted>, AppError> {
    let id = student_id(raw_id)?;
    if !students(&ctx).delete(id).await? {
        return Err(not_found());
    }
    Ok(Json(Deleted::new("Student deleted successfully")))
}
