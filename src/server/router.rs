use std::{sync::Arc, time::Duration};

use axum::{http::StatusCode, middleware::from_fn_with_state, Router};
use tokio::sync::Semaphore;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{drone, medication},
    middleware::bulkhead::bulkhead,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Drone Dispatch API",
    description = "Register drones, load medications and track deliveries"
))]
struct ApiDoc;

/// Limits applied at the HTTP boundary.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryLimits {
    /// Requests running longer are answered with 408.
    pub request_timeout: Duration,
    /// Requests beyond this many in flight are answered with 503.
    pub max_concurrent_requests: usize,
    /// Per-client quota; `None` serves every client without limit.
    pub rate_limit: Option<RateLimit>,
}

/// Token bucket applied per client IP.
///
/// The client IP is taken from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`, falling
/// back to the peer address, so the server must be run with connect info.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    /// Time for one spent request to be returned to the bucket.
    pub replenish_interval: Duration,
    /// Requests a client may send back to back.
    pub burst_size: u32,
}

impl RateLimit {
    /// Rate limit from configured values; a zero burst or interval disables it.
    pub fn from_config(replenish_ms: u64, burst_size: u32) -> Option<Self> {
        (replenish_ms > 0 && burst_size > 0).then(|| Self {
            replenish_interval: Duration::from_millis(replenish_ms),
            burst_size,
        })
    }
}

/// Builds the API router with documentation and boundary layers applied.
///
/// # Arguments
/// - `state` - Shared application state
/// - `limits` - Request timeout, bulkhead size and rate limit
///
/// # Returns
/// - `Router` - Ready to serve
pub fn router(state: AppState, limits: BoundaryLimits) -> Router {
    let (router, api) = api_router().split_for_parts();
    let permits = Arc::new(Semaphore::new(limits.max_concurrent_requests));

    // Outermost to innermost: CORS, trace, rate limit (429), timeout (408), bulkhead (503).
    let mut router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(from_fn_with_state(permits, bulkhead))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.request_timeout,
        ));

    if let Some(rate_limit) = limits.rate_limit {
        let config = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .period(rate_limit.replenish_interval)
            .burst_size(rate_limit.burst_size)
            .finish();

        match config {
            Some(config) => router = router.layer(GovernorLayer::new(config)),
            None => tracing::warn!("Rate limit {:?} is not usable; serving without it", rate_limit),
        }
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(drone::register_drone, drone::list_drones))
        .routes(routes!(drone::get_drone))
        .routes(routes!(drone::update_drone_state))
        .routes(routes!(drone::load_medication, drone::get_loaded_medications))
        .routes(routes!(drone::get_loaded_weight))
        .routes(routes!(drone::get_battery_level))
        .routes(routes!(drone::get_battery_history))
        .routes(routes!(drone::handle_delivery))
        .routes(routes!(drone::return_to_base))
        .routes(routes!(drone::mark_idle))
        .routes(routes!(medication::create_medication))
        .routes(routes!(medication::get_medication))
}
