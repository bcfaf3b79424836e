use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Account entity representing a complete account record from the database.
///
/// Deliberately not `Serialize`: the password hash and raw image bytes never
/// leave the store layer as-is. Responses go through the DTOs.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<Vec<u8>>,
    pub pix_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data structure for creating a new account.
///
/// The password must already be hashed before this is constructed.
#[derive(Debug, Clone)]
pub struct AccountForCreate {
    pub email: String,
    pub password_hash: String,
    pub pix_key: Option<String>,
}

impl AccountForCreate {
    pub fn new(email: String, password_hash: String, pix_key: Option<String>) -> Self {
        Self {
            email,
            password_hash,
            pix_key,
        }
    }
}

/// Data structure for updating an existing account.
///
/// Only these enumerated fields are updatable; anything else on the entity
/// (id, image, timestamps) has its own dedicated operation or is immutable.
#[derive(Debug, Clone, Default)]
pub struct AccountForUpdate {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub pix_key: Option<String>,
}

impl AccountForUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email.
    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the password hash.
    pub fn password_hash(mut self, password_hash: String) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    /// Set the pix key.
    pub fn pix_key(mut self, pix_key: String) -> Self {
        self.pix_key = Some(pix_key);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.pix_key.is_none()
    }
}
