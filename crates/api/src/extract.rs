//! Request extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's stock `Json` rejects malformed or incomplete bodies with 422 and a
//! plain-text message; these wrappers turn every rejection into a 400.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use roster_core::error::CoreError;

use crate::error::AppError;

/// JSON body extractor. Missing fields, wrong types, unparseable dates and
/// syntax errors all become `400 VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor. A non-numeric id becomes `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
