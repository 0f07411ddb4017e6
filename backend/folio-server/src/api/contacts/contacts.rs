//! Contact REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, ContactDto};

use folio_core::{ContactPayload, validate_contact_input};

use axum::{Json, extract::State, http::StatusCode};

/// GET /api/contacts
pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<ContactDto>> {
    let contacts = state.storage.list_contacts().await;

    Json(contacts.into_iter().map(ContactDto::from).collect())
}

/// POST /api/contacts
///
/// Once the contact is stored, the configured notifier (if any) is asked to
/// send an email. A failed notification is logged; the response is still 201.
pub async fn create_contact(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactPayload>,
) -> ApiResult<(StatusCode, Json<ContactDto>)> {
    let input = validate_contact_input(payload)?;

    let contact = state
        .storage
        .create_contact(input)
        .await
        .map_err(|e| ApiError::storage("Failed to create contact", e))?;

    log::info!("Created contact {}", contact.id);

    if let Some(notifier) = &state.notifier
        && let Err(e) = notifier.notify_contact(&contact).await
    {
        log::warn!(
            "Failed to send notification for contact {}: {}",
            contact.id,
            e
        );
    }

    Ok((StatusCode::CREATED, Json(contact.into())))
}
