//! # Authentication Data Transfer Objects
//!
//! Shapes for `POST /api/auth/login` and the standard error body.
//!
//! Login failures are deliberately uniform: an unknown email and a wrong
//! password produce the same status and the same body.

use super::account::AccountResponse;
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: a bearer token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    pub account: AccountResponse,
}

/// Standard error response body, mirroring `AppError`'s JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
