//! Showcase seeding handler

use crate::{ApiError, ApiResult, AppState, SeedResponse, showcase_projects};

use axum::{Json, extract::State};

/// POST /api/seed
///
/// Inserts the showcase projects when the collection is empty. Existing
/// projects are never removed, so repeated calls are harmless.
pub async fn seed_projects(State(state): State<AppState>) -> ApiResult<Json<SeedResponse>> {
    let count = state
        .storage
        .seed_projects(showcase_projects())
        .await
        .map_err(|e| ApiError::storage("Failed to seed projects", e))?;

    let message = if count > 0 {
        "Seeded projects successfully"
    } else {
        "Projects already present, nothing seeded"
    };

    Ok(Json(SeedResponse {
        success: true,
        count,
        message: message.to_string(),
    }))
}
