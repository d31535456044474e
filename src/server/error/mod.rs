//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod drone;
pub mod internal;
pub mod medication;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, drone::DroneError, internal::InternalError,
        medication::MedicationError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle their own
/// response mapping, while infrastructure failures collapse into a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Drone lifecycle or loading rejection.
    ///
    /// Delegates to `DroneError::into_response()` (404, 409 or 400).
    #[error(transparent)]
    DroneErr(#[from] DroneError),

    /// Medication catalog error.
    ///
    /// Delegates to `MedicationError::into_response()` (404 or 409).
    #[error(transparent)]
    MedicationErr(#[from] MedicationError),

    /// Registration or catalog input failed validation.
    ///
    /// Always results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected internal state, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket or listener error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the error is a transient storage failure that a read may retry.
    ///
    /// Only connection-level database errors qualify; domain rejections and query
    /// errors are never transient.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::DbErr(sea_orm::DbErr::Conn(_)) | Self::DbErr(sea_orm::DbErr::ConnectionAcquire(_))
        )
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Domain errors delegate to their own response handling, while other errors use
/// standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - Variable - For `DroneErr` and `MedicationErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::DroneErr(err) => err.into_response(),
            Self::MedicationErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
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
