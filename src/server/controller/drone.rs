use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        drone::{
            BatteryHistoryEntryDto, BatteryHistoryQuery, BatteryLevelDto, DeliveryActionQuery,
            DroneDto, DroneStateQuery, LoadedWeightDto, RegisterDroneDto, UpdateDroneStateDto,
        },
        medication::{LoadMedicationDto, LoadingRecordDto, MedicationDto},
    },
    server::{
        error::AppError,
        model::drone::MarkIdleOutcome,
        service::{
            battery::{BatteryHistoryService, DEFAULT_HISTORY_LIMIT},
            drone::DroneService,
            ledger::LedgerService,
        },
        state::AppState,
        util::retry::with_read_retry,
    },
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

fn drone_service(state: &AppState) -> DroneService<'_> {
    DroneService::new(&state.db, &state.drone_locks, &state.events)
}

/// Register a new drone.
///
/// Validates the serial number, weight limit, battery level and initial state before
/// persisting the drone and publishing a registration event.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Drone attributes
///
/// # Returns
/// - `201 Created` - The registered drone
/// - `400 Bad Request` - Input breaks a registration rule
/// - `409 Conflict` - Serial number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones",
    tag = DRONE_TAG,
    request_body = RegisterDroneDto,
    responses(
        (status = 201, description = "Successfully registered drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 409, description = "Serial number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_drone(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let drone = drone_service(&state).register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(drone.into_dto())))
}

/// List drones by lifecycle state.
///
/// Without a `state` filter, returns the drones available for loading (`IDLE`).
///
/// # Returns
/// - `200 OK` - Drones in the requested state, oldest registration first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones",
    tag = DRONE_TAG,
    params(DroneStateQuery),
    responses(
        (status = 200, description = "Successfully retrieved drones", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drones(
    State(state): State<AppState>,
    Query(query): Query<DroneStateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = drone_service(&state);

    let drones = with_read_retry(|| service.list_drones(query.state)).await?;
    let drones: Vec<DroneDto> = drones.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(drones)))
}

/// Get a drone by ID.
///
/// # Returns
/// - `200 OK` - The drone
/// - `404 Not Found` - No drone with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drone", body = DroneDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = drone_service(&state);

    let drone = with_read_retry(|| service.get_drone(drone_id)).await?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// Apply an explicit lifecycle transition.
///
/// Only the next state in the delivery cycle is accepted.
///
/// # Returns
/// - `200 OK` - The drone in its new state
/// - `404 Not Found` - No drone with that ID
/// - `409 Conflict` - Target is not a legal transition from the current state
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/drones/{drone_id}/state",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateDroneStateDto,
    responses(
        (status = 200, description = "Successfully updated drone state", body = DroneDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Illegal state transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_state(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Json(payload): Json<UpdateDroneStateDto>,
) -> Result<impl IntoResponse, AppError> {
    let drone = drone_service(&state)
        .update_state(drone_id, payload.state)
        .await?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// Load a medication onto a drone.
///
/// Checks battery level, cumulative weight and drone state before recording the load.
/// On success the drone is `LOADED`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `drone_id` - Drone to load
/// - `payload` - Medication to load
///
/// # Returns
/// - `201 Created` - The loading record with the drone's new state
/// - `400 Bad Request` - Medication would exceed the weight limit
/// - `404 Not Found` - Unknown drone or medication
/// - `409 Conflict` - Battery too low or drone not available for loading
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones/{drone_id}/medications",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    request_body = LoadMedicationDto,
    responses(
        (status = 201, description = "Successfully loaded medication", body = LoadingRecordDto),
        (status = 400, description = "Weight limit exceeded", body = ErrorDto),
        (status = 404, description = "Drone or medication not found", body = ErrorDto),
        (status = 409, description = "Battery too low or drone not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_medication(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Json(payload): Json<LoadMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = drone_service(&state)
        .load_medication(drone_id, payload.medication_id)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// List the medications loaded onto a drone.
///
/// # Returns
/// - `200 OK` - Loaded medications in loading order
/// - `404 Not Found` - No drone with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/medications",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved loaded medications", body = Vec<MedicationDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loaded_medications(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LedgerService::new(&state.db);

    let medications = with_read_retry(|| service.list_medications(drone_id)).await?;
    let medications: Vec<MedicationDto> = medications.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(medications)))
}

/// Get the total weight loaded onto a drone.
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/loaded-weight",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved loaded weight", body = LoadedWeightDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loaded_weight(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LedgerService::new(&state.db);

    let loaded = with_read_retry(|| service.loaded_weight(drone_id)).await?;

    Ok((StatusCode::OK, Json(loaded.into_dto())))
}

/// Get a drone's current battery level.
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/battery-level",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved battery level", body = BatteryLevelDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battery_level(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = drone_service(&state);

    let battery_capacity = with_read_retry(|| service.check_battery_level(drone_id)).await?;

    Ok((
        StatusCode::OK,
        Json(BatteryLevelDto {
            drone_id,
            battery_capacity,
        }),
    ))
}

/// Get a drone's recorded battery samples, newest first.
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/battery-history",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID"),
        BatteryHistoryQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved battery history", body = Vec<BatteryHistoryEntryDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battery_history(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Query(query): Query<BatteryHistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BatteryHistoryService::new(&state.db);
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    let history = with_read_retry(|| service.get_history(drone_id, limit)).await?;
    let history: Vec<BatteryHistoryEntryDto> = history.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(history)))
}

/// Start or complete a delivery.
///
/// `action=start` moves a `LOADED` drone to `DELIVERING`; `action=complete` moves a
/// `DELIVERING` drone to `DELIVERED`.
///
/// # Returns
/// - `202 Accepted` - Delivery started
/// - `200 OK` - Delivery completed
/// - `400 Bad Request` - Unknown action
/// - `404 Not Found` - No drone with that ID
/// - `409 Conflict` - Drone is not in the required state
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones/{drone_id}/deliveries",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID"),
        DeliveryActionQuery
    ),
    responses(
        (status = 202, description = "Delivery process started", body = MessageDto),
        (status = 200, description = "Delivery completed successfully", body = MessageDto),
        (status = 400, description = "Invalid action", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Illegal state transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handle_delivery(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Query(query): Query<DeliveryActionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = drone_service(&state);

    match query.action.as_str() {
        "start" => {
            service.start_delivery(drone_id).await?;
            Ok((
                StatusCode::ACCEPTED,
                Json(MessageDto::new("Delivery process started")),
            ))
        }
        "complete" => {
            service.complete_delivery(drone_id).await?;
            Ok((
                StatusCode::OK,
                Json(MessageDto::new("Delivery completed successfully")),
            ))
        }
        other => Err(AppError::BadRequest(format!(
            "Invalid action '{}', expected 'start' or 'complete'",
            other
        ))),
    }
}

/// Return a delivered drone to base.
///
/// The drone passes through `RETURNING` and ends `IDLE`.
#[utoipa::path(
    post,
    path = "/api/drones/{drone_id}/return-to-base",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 202, description = "Drone return process started", body = MessageDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Drone has not delivered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_to_base(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    drone_service(&state).return_to_base(drone_id).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto::new("Drone return process started")),
    ))
}

/// Mark a returning drone as idle.
///
/// # Returns
/// - `200 OK` - The drone is now `IDLE`
/// - `404 Not Found` - No drone with that ID
/// - `409 Conflict` - The drone is not `RETURNING`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones/{drone_id}/mark-idle",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Drone marked as idle", body = MessageDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Drone is not returning", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_idle(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let response = match drone_service(&state).mark_idle(drone_id).await? {
        MarkIdleOutcome::Idle(drone) => (
            StatusCode::OK,
            Json(MessageDto::new(format!("Drone {} marked as IDLE", drone.id))),
        )
            .into_response(),
        MarkIdleOutcome::Conflict(current) => (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: format!(
                    "Drone {} is {} and cannot be marked as IDLE",
                    drone_id, current
                ),
            }),
        )
            .into_response(),
        MarkIdleOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("Drone {} not found", drone_id),
            }),
        )
            .into_response(),
    };

    Ok(response)
}
