//! Concurrency bulkhead for API requests.
//!
//! Caps the number of requests in flight. A request arriving while every permit is
//! taken is rejected immediately with 503 instead of queuing behind slow ones.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::Semaphore;

use crate::model::api::ErrorDto;

/// Admits a request if a permit is free, holding it until the response is produced.
///
/// Used with `axum::middleware::from_fn_with_state` and a semaphore sized from
/// `MAX_CONCURRENT_REQUESTS`.
///
/// # Returns
/// - Inner response - A permit was available
/// - `503 Service Unavailable` - The bulkhead is saturated
pub async fn bulkhead(
    State(permits): State<Arc<Semaphore>>,
    request: Request,
    next: Next,
) -> Response {
    match permits.try_acquire() {
        Ok(_permit) => next.run(request).await,
        Err(_) => {
            tracing::warn!("Bulkhead saturated, rejecting {}", request.uri().path());

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Server is busy, try again later".to_string(),
                }),
            )
                .into_response()
        }
    }
}
