use crate::{ApiError, ApiJson};

use folio_core::ContactPayload;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header},
};

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_valid_json_is_extracted() {
    let request = json_request(r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#);

    let ApiJson(payload) = ApiJson::<ContactPayload>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(payload.name.as_deref(), Some("Jane"));
    assert_eq!(payload.email.as_deref(), Some("jane@x.com"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = json_request(r#"{"name":"Jane","#);

    let result = ApiJson::<ContactPayload>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let request = json_request(r#"{"name":42}"#);

    let result = ApiJson::<ContactPayload>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contacts")
        .body(Body::from(r#"{"name":"Jane"}"#))
        .unwrap();

    let result = ApiJson::<ContactPayload>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
