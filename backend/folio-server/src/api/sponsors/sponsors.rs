//! Sponsor REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, SponsorDto};

use folio_core::{SponsorPayload, validate_sponsor_input};

use axum::{Json, extract::State, http::StatusCode};

/// GET /api/sponsors
pub async fn list_sponsors(State(state): State<AppState>) -> Json<Vec<SponsorDto>> {
    let sponsors = state.storage.list_sponsors().await;

    Json(sponsors.into_iter().map(SponsorDto::from).collect())
}

/// POST /api/sponsors
pub async fn create_sponsor(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SponsorPayload>,
) -> ApiResult<(StatusCode, Json<SponsorDto>)> {
    let input = validate_sponsor_input(payload)?;

    let sponsor = state
        .storage
        .create_sponsor(input)
        .await
        .map_err(|e| ApiError::storage("Failed to create sponsor", e))?;

    log::info!("Created sponsor {}", sponsor.id);

    Ok((StatusCode::CREATED, Json(sponsor.into())))
}
