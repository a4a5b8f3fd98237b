//! Extractors whose rejections become [`AppError`] responses.
//!
//! Drop-in replacements for axum's `Json`, `Path` and `Query` so that a
//! malformed body, a non-numeric id or a bad query value all produce the
//! same `{"error", "code"}` body with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
