//! # Account Data Transfer Objects
//!
//! Shapes for account registration, lookup, update, and the profile
//! picture endpoints.
//!
//! Registration itself arrives as `multipart/form-data` (fields `email`,
//! `password`, optional `pix_key`, optional `profile_picture` file part) and
//! is parsed field by field in the handler, so it has no request DTO here.

use crate::model::store::models::Account;
use lib_utils::time::format_time;
use serde::{Deserialize, Serialize};

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    pub has_profile_picture: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            pix_key: account.pix_key.clone(),
            has_profile_picture: account.profile_picture.is_some(),
            created_at: format_time(account.created_at),
            updated_at: format_time(account.updated_at),
        }
    }
}

/// Partial update request. Only these fields are updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdateRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub pix_key: Option<String>,
}

/// Profile picture payload: base64url-encoded image bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePictureResponse {
    pub image: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
