//! # Registration Tests

use super::*;
use axum::http::StatusCode;
use lib_core::dto::{AccountResponse, ErrorResponse};

#[tokio::test]
async fn test_register_success() {
    let app = test_app().await;

    let response = app
        .oneshot(register_request(
            "a@b.com",
            "Secr3t!pass",
            Some("pix-key-123"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let account: AccountResponse = body_json(response).await;
    assert_eq!(account.email, "a@b.com");
    assert_eq!(account.pix_key.as_deref(), Some("pix-key-123"));
    assert!(!account.has_profile_picture);
    assert!(!account.id.is_empty());
}

#[tokio::test]
async fn test_register_with_profile_picture() {
    let app = test_app().await;
    let image = b"\x89PNG\r\n\x1a\n fake image bytes";

    let response = app
        .oneshot(register_request("a@b.com", "Secr3t!pass", None, Some(image)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let account: AccountResponse = body_json(response).await;
    assert!(account.has_profile_picture);
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(register_request("a@b.com", "Secr3t!pass", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(register_request("a@b.com", "OtherPass1!", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "Conflict");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = test_app().await;

    let response = app
        .oneshot(register_request("not-an-email", "Secr3t!pass", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "Validation");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = test_app().await;

    let response = app
        .oneshot(register_request("a@b.com", "short", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_missing_password() {
    let app = test_app().await;

    // Only an email field; no password part at all.
    let mut only_email = Vec::new();
    only_email.extend(
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\na@b.com\r\n")
            .into_bytes(),
    );
    only_email.extend(format!("--{BOUNDARY}--\r\n").into_bytes());

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/api/accounts")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(axum::body::Body::from(only_email))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, "password is required");
}
