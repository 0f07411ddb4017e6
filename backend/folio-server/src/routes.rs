use crate::{
    ApiError, AppState, create_contact, create_project, create_sponsor, health, list_contacts,
    list_projects, list_sponsors, request_logging, seed_projects,
};

use folio_config::CorsConfig;

use axum::{
    Router,
    http::{HeaderValue, Method, Uri, header, request::Parts},
    middleware,
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    let mut router = Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route("/api/sponsors", get(list_sponsors).post(create_sponsor))
        .route("/api/debug", get(health::debug_info));

    if state.api_config.seed_enabled {
        router = router.route("/api/seed", post(seed_projects));
    }

    router
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Unknown paths and unsupported methods both answer 404
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        // Add shared state
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(request_logging::log_requests))
}

/// Only listed origins get CORS headers; requests without `Origin` pass through untouched
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed = config.allowed_origins.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                let permitted = allowed
                    .iter()
                    .any(|candidate| candidate.as_bytes() == origin.as_bytes());
                if !permitted {
                    warn!("Blocked CORS origin: {:?}", origin);
                }
                permitted
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

async fn not_found(uri: Uri) -> ApiError {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        ApiError::not_found("API route not found")
    } else {
        ApiError::not_found("Not found")
    }
}
