//! Project REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, ProjectDto};

use folio_core::{ProjectPayload, validate_project_input};

use axum::{Json, extract::State, http::StatusCode};

/// GET /api/projects
///
/// Newest first. Storage faults degrade to an empty list.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectDto>> {
    let projects = state.storage.list_projects().await;

    Json(projects.into_iter().map(ProjectDto::from).collect())
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProjectPayload>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let input = validate_project_input(payload)?;

    let project = state
        .storage
        .create_project(input)
        .await
        .map_err(|e| ApiError::storage("Failed to create project", e))?;

    log::info!("Created project {} ({})", project.id, project.title);

    Ok((StatusCode::CREATED, Json(project.into())))
}
