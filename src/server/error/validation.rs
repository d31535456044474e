use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input that violates registration or catalog rules.
///
/// Every variant results in a 400 Bad Request response carrying the message below.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Serial number must not be blank")]
    BlankSerialNumber,

    #[error("Serial number is {length} characters long, the maximum is {max}")]
    SerialNumberTooLong { length: usize, max: usize },

    #[error("Weight limit {value}g must be greater than 0 and at most {max}g")]
    WeightLimitOutOfRange { value: i32, max: i32 },

    #[error("Battery capacity {0}% must be between 0 and 100")]
    BatteryCapacityOutOfRange(i32),

    #[error("Initial drone state is required")]
    MissingState,

    #[error("Medication name '{0}' may only contain letters, numbers, '-' and '_'")]
    InvalidMedicationName(String),

    #[error("Medication code '{0}' may only contain uppercase letters, numbers and '_'")]
    InvalidMedicationCode(String),

    #[error("Medication weight {value}g must be greater than 0 and at most {max}g")]
    MedicationWeightOutOfRange { value: i32, max: i32 },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
