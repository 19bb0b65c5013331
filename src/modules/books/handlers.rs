use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use campus_db::{bson::oid::ObjectId, parse_id};
use campus_http::{AppError, ValidatedJson};
use campus_kernel::AppContext;

use super::models::{Book, BookPatch, BookRecord, NewBook};
use crate::{modules::Deleted, repository::Repository};

pub(crate) const COLLECTION: &str = "books";

fn books(ctx: &AppContext) -> Repository<BookRecord> {
    Repository::new(ctx, COLLECTION)
}

/// Path segments that fail to decode (e.g. invalid UTF-8) are malformed identifiers too.
fn book_id(raw: Result<Path<String>, PathRejection>) -> Result<ObjectId, AppError> {
    raw.ok()
        .and_then(|Path(raw)| parse_id(&raw))
        .ok_or_else(|| AppError::bad_request("Invalid book ID"))
}

fn not_found() -> AppError {
    AppError::not_found("Book not found")
}

pub(crate) async fn create_book(
    State(ctx): State<AppContext>,
    ValidatedJson(book): ValidatedJson<NewBook>,
) -> Result<Json<Book>, AppError> {
    let created = books(&ctx)
        .insert(&book)
        .await?
        .ok_or_else(|| AppError::internal("created book could not be read back"))?;

    tracing::debug!(id = %created.id, "book created");
    Ok(Json(created.into()))
}

pub(crate) async fn list_books(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<Book>>, AppError> {
    let records = books(&ctx).list().await?;
    Ok(Json(records.into_iter().map(Book::from).collect()))
}

pub(crate) async fn get_book(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, AppError> {
    let id = book_id(raw_id)?;
    let record = books(&ctx).find(id).await?.ok_or_else(not_found)?;
    Ok(Json(record.into()))
}

pub(crate) async fn update_book(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
    ValidatedJson(patch): ValidatedJson<BookPatch>,
) -> Result<Json<Book>, AppError> {
    if patch.is_empty() {
        return Err(AppError::bad_request("No data to update"));
    }
    let id = book_id(raw_id)?;

    let repo = books(&ctx);
    let outcome = repo.update(id, &patch).await?;
    if outcome.matched == 0 {
        return Err(not_found());
    }
    if outcome.modified == 0 {
        tracing::debug!(%id, "book update changed nothing");
    }

    let record = repo.find(id).await?.ok_or_else(not_found)?;
    Ok(Json(record.into()))
}

pub(crate) async fn delete_book(
    State(ctx): State<AppContext>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Deleted>, AppError> {
    let id = book_id(raw_id)?;
    if !books(&ctx).delete(id).await? {
        return Err(not_found());
    }
    Ok(Json(Deleted::new("Book deleted successfully")))
}
