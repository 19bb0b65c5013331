//! Request extractors that report failures in the campus error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections become 422 [`AppError::Validation`].
///
/// Missing fields, wrong primitive types, malformed JSON, and a missing
/// `application/json` content type are all rejected before the handler runs.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidatedJson<T>(pub T);
