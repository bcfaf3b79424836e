//! # Auth Handler Tests
//!
//! Test suite for login, logout, registration, and the protected-route
//! middleware, plus shared helpers used by the account handler tests.

mod register;

use crate::routes;
use crate::server::AppState;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use lib_auth::TokenBlacklist;
use lib_core::model::store::create_schema;
use lib_core::{Config, DbPool};
use serde::de::DeserializeOwned;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";
pub const BOUNDARY: &str = "f7a1bd4e9c33-test-boundary";

/// In-memory database with the schema applied.
///
/// A single connection: each new `sqlite::memory:` connection would be a
/// fresh empty database.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    create_schema(&pool)
        .await
        .expect("Failed to create accounts table");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_algorithm: "HS256".to_string(),
        session_ttl_minutes: 60,
        bind_address: "127.0.0.1:0".to_string(),
    }
}

pub async fn test_state() -> AppState {
    AppState {
        db: setup_test_db().await,
        config: test_config(),
        blacklist: Arc::new(TokenBlacklist::new()),
    }
}

/// Full router over a fresh in-memory database.
pub async fn test_app() -> Router {
    routes::app(test_state().await)
}

/// Hand-rolled multipart/form-data body for the registration endpoint.
pub fn multipart_register_body(
    email: &str,
    password: &str,
    pix_key: Option<&str>,
    image: Option<&[u8]>,
) -> Vec<u8> {
    fn text_part(name: &str, value: &str) -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
        .into_bytes()
    }

    let mut body = Vec::new();
    body.extend(text_part("email", email));
    body.extend(text_part("password", password));
    if let Some(pix_key) = pix_key {
        body.extend(text_part("pix_key", pix_key));
    }
    if let Some(image) = image {
        body.extend(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"profile_picture\"; \
                 filename=\"avatar.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .into_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }
    body.extend(format!("--{BOUNDARY}--\r\n").into_bytes());
    body
}

pub fn register_request(
    email: &str,
    password: &str,
    pix_key: Option<&str>,
    image: Option<&[u8]>,
) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/accounts")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_register_body(
            email, password, pix_key, image,
        )))
        .unwrap()
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "email": email, "password": password }).to_string(),
        ))
        .unwrap()
}

/// Bodyless request with a bearer token.
pub fn bearer_request(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body should be valid JSON")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

/// Register an account and log it in, returning the bearer token.
pub async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(register_request(email, password, None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(login_request(email, password))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let token_response: lib_core::dto::TokenResponse = body_json(response).await;
    token_response.access_token
}
