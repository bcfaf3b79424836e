//! # Authentication Handlers
//!
//! Login and logout.
//!
//! Login verifies the password against the stored Argon2 hash and issues a
//! session token bound to the account email. A failed lookup and a failed
//! verification produce identical responses so the endpoint cannot be used
//! to probe which emails exist.

use crate::middleware::{BearerToken, CurrentAccount};
use crate::server::AppState;
use axum::extract::{Extension, Json, State};
use chrono::Duration;
use lib_auth::{issue_token, verify_password, Claims};
use lib_core::dto::{LoginRequest, MessageResponse, TokenResponse};
use lib_core::model::store::AccountRepository;
use lib_core::{AppError, Result};
use tracing::{debug, info, warn};

/// Login handler: verify credentials, issue a bearer token.
///
/// Issues exactly one token and performs zero database writes.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    info!("[LOGIN] Login attempt");

    let account = AccountRepository::find_by_email(&state.db, &req.email).await?;

    let Some(account) = account else {
        // Same failure as a wrong password; do not reveal the email is unknown.
        warn!("[LOGIN] Unknown email");
        return Err(AppError::AuthFailed);
    };

    debug!("[LOGIN] Verifying password");
    let is_valid = verify_password(&req.password, &account.password_hash).map_err(|e| {
        warn!("[LOGIN] Stored hash unusable for {}: {}", account.id, e);
        AppError::AuthFailed
    })?;

    if !is_valid {
        warn!("[LOGIN] Wrong password for account {}", account.id);
        return Err(AppError::AuthFailed);
    }

    let token = issue_token(
        &account.email,
        &state.config.jwt_secret,
        state.signing_algorithm()?,
        Some(Duration::minutes(state.config.session_ttl_minutes)),
    )
    .map_err(|e| AppError::Internal(format!("Failed to issue token: {}", e)))?;

    info!("[LOGIN] Account {} authenticated", account.id);

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        account: (&account).into(),
    }))
}

/// Logout handler: revoke the presented token.
///
/// The token stays blacklisted until its own expiry; revoking an
/// already-revoked token is a no-op with the same outcome.
pub async fn logout(
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
    Extension(claims): Extension<Claims>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> Json<MessageResponse> {
    state.blacklist.revoke(&token, claims.exp);
    info!("[LOGOUT] Token revoked for account {}", account.id);

    Json(MessageResponse {
        message: "Logout successful".to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests;
