use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        medication::{CreateMedicationDto, MedicationDto},
    },
    server::{
        error::AppError, service::medication::MedicationService, state::AppState,
        util::retry::with_read_retry,
    },
};

/// Tag for grouping medication endpoints in OpenAPI documentation
pub static MEDICATION_TAG: &str = "medication";

/// Add a medication to the catalog.
///
/// Names may contain letters, digits, `-` and `_`; codes only upper-case letters,
/// digits and `_`. Codes are unique.
///
/// # Returns
/// - `201 Created` - The created medication
/// - `400 Bad Request` - Invalid name, code or weight
/// - `409 Conflict` - Code already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    request_body = CreateMedicationDto,
    responses(
        (status = 201, description = "Successfully created medication", body = MedicationDto),
        (status = 400, description = "Invalid medication data", body = ErrorDto),
        (status = 409, description = "Medication code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medication(
    State(state): State<AppState>,
    Json(payload): Json<CreateMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let medication = MedicationService::new(&state.db)
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(medication.into_dto())))
}

/// Get a medication by ID.
#[utoipa::path(
    get,
    path = "/api/medications/{medication_id}",
    tag = MEDICATION_TAG,
    params(
        ("medication_id" = i32, Path, description = "Medication ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved medication", body = MedicationDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MedicationService::new(&state.db);

    let medication = with_read_retry(|| service.get(medication_id)).await?;

    Ok((StatusCode::OK, Json(medication.into_dto())))
}
