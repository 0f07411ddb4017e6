use crate::AppState;

use folio_db::Database;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = state.storage.status().await;

    let health = json!({
        "status": if database.is_ready() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database.as_str(),
            "mailer": if state.notifier.is_some() { "configured" } else { "disabled" },
        },
        "timestamp": timestamp(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can requests reach storage?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let database = state.storage.status().await;

    if database.is_ready() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Database {}", database.as_str()),
        )
            .into_response()
    }
}

/// GET /api/debug - Runtime diagnostics. Never reveals the connection string.
pub async fn debug_info(State(state): State<AppState>) -> Response {
    let database = state.storage.status().await;
    let uri_set = !matches!(state.storage.database(), Database::Unavailable);

    let info = json!({
        "mongodbUri": if uri_set { "Set" } else { "Not set" },
        "database": database.as_str(),
        "mailer": if state.notifier.is_some() { "configured" } else { "disabled" },
        "seedEnabled": state.api_config.seed_enabled,
        "environment": state.environment,
        "timestamp": timestamp(),
    });

    (StatusCode::OK, Json(info)).into_response()
}
