//! Request extractors that report rejections through `AppError`.
//!
//! Axum's stock `Json` and `Path` extractors answer rejections with plain-text bodies.
//! These wrappers route the same rejections through `AppError` so every client-facing
//! error carries the `ErrorDto` JSON shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor; malformed bodies never reach the handler.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor; unparsable ids are answered with 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
