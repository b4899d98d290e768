//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client mistakes (unknown id, invalid fields,
/// malformed bodies) each keep their own status code, while store and infrastructure
/// failures are reported as server errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Connectivity failures result in 503 Service Unavailable, everything else in
    /// 500 Internal Server Error. Details are logged server-side only.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener or socket error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body could not be parsed as the expected JSON payload.
    ///
    /// The status code is taken from the rejection: 400 for malformed syntax,
    /// 415 for a missing JSON content type, 422 for well-formed JSON of the wrong shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-numeric record id.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and an `ErrorDto` body.
/// Internal errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, path rejections and malformed JSON
/// - 404 Not Found - For `NotFound`
/// - 415 / 422 - For JSON rejections carrying those statuses
/// - 503 Service Unavailable - For lost or unobtainable database connections
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::JsonRejection(rejection) => (
                rejection.status(),
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::PathRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::DbErr(err) if is_connection_error(&err) => {
                tracing::error!("Database unavailable: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Service unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Whether a database error means the store itself could not be reached.
fn is_connection_error(err: &sea_orm::DbErr) -> bool {
    matches!(
        err,
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
    )
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a missing record maps to 404.
    ///
    /// Expected: 404 Not Found
    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("News 7 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests that a validation failure maps to 400.
    ///
    /// Expected: 400 Bad Request
    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("name must not be blank".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests that a lost connection is reported as the store being unavailable
    /// rather than as a generic server fault.
    ///
    /// Expected: 503 Service Unavailable
    #[test]
    fn connection_loss_maps_to_503() {
        let err = sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal("closed".to_string()));
        let response = AppError::DbErr(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    /// Tests that other store failures are reported as internal errors.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn query_failure_maps_to_500() {
        let err = sea_orm::DbErr::Custom("constraint failed".to_string());
        let response = AppError::DbErr(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Tests that configuration errors are never exposed as client errors.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn config_error_maps_to_500() {
        let err = ConfigError::MissingEnvVar("DATABASE_URL".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
