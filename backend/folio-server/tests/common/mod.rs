#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_config::{ApiConfig, CorsConfig};
use folio_core::Contact;
use folio_db::{Database, Storage};
use folio_mailer::{NotificationError, Notifier};
use folio_server::AppState;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "https://allowed.example";

/// AppState over an empty in-memory database, seeding enabled
pub fn create_test_app_state() -> AppState {
    app_state_with(Database::in_memory())
}

/// AppState whose database is unavailable (degraded mode)
pub fn create_degraded_app_state() -> AppState {
    app_state_with(Database::unavailable())
}

fn app_state_with(database: Database) -> AppState {
    AppState::new(Storage::new(database))
        .with_api_config(ApiConfig { seed_enabled: true })
        .with_cors_config(CorsConfig {
            allowed_origins: vec![
                ALLOWED_ORIGIN.to_string(),
                "http://localhost:5173".to_string(),
            ],
        })
        .with_environment("test")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a clone of the router and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Notifier that remembers every contact it was asked about
#[derive(Default)]
pub struct RecordingNotifier {
    pub notified: Mutex<Vec<Contact>>,
}

impl RecordingNotifier {
    pub fn notified_ids(&self) -> Vec<String> {
        self.notified
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.id.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_contact(&self, contact: &Contact) -> Result<(), NotificationError> {
        self.notified.lock().unwrap().push(contact.clone());
        Ok(())
    }
}

/// Notifier that always fails delivery
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_contact(&self, _contact: &Contact) -> Result<(), NotificationError> {
        Err(NotificationError::Task {
            message: "smtp relay unreachable".to_string(),
            location: folio_core::ErrorLocation::from(std::panic::Location::caller()),
        })
    }
}

pub fn recording_notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}
