use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum MedicationError {
    /// No medication exists with the requested ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("Medication {0} not found")]
    NotFound(i32),

    /// Another medication already uses the code.
    ///
    /// Results in a 409 Conflict response.
    #[error("A medication with code '{0}' already exists")]
    DuplicateCode(String),
}

impl IntoResponse for MedicationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateCode(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
