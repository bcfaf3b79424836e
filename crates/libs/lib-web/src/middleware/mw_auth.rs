//! # Authentication Middleware
//!
//! Resolves the current account from an `Authorization: Bearer <token>`
//! header on every protected request.
//!
//! The token is validated (signature, claims, revocation, expiry), its
//! subject email is re-queried from the store, and the resulting account is
//! injected into request extensions. Every failure along the way surfaces as
//! the same 401 with a `WWW-Authenticate: Bearer` challenge; the actual
//! reason is only visible in server logs.
//!
//! Handlers extract the result with `Extension<CurrentAccount>`; logout also
//! extracts `Extension<BearerToken>` to know which token to revoke.

use crate::server::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{validate_token, Claims};
use lib_core::model::store::models::Account;
use lib_core::model::store::AccountRepository;
use lib_core::{AppError, Result};
use tracing::{debug, warn};

/// The account resolved from the request's bearer token.
#[derive(Clone, Debug)]
pub struct CurrentAccount(pub Account);

/// The raw bearer token the request carried.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

/// Authentication middleware guarding the protected routes.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = {
        let auth_header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                warn!("[AUTH] Missing Authorization header");
                AppError::Unauthorized("missing Authorization header".to_string())
            })?;

        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                warn!("[AUTH] Authorization header is not a Bearer token");
                AppError::Unauthorized("Authorization header is not a Bearer token".to_string())
            })?
            .to_string()
    };

    let claims: Claims = validate_token(
        &token,
        &state.config.jwt_secret,
        state.signing_algorithm()?,
        &state.blacklist,
    )
    .map_err(|e| {
        // Expired, revoked, and bad-signature all look the same to the
        // client; the distinction lives here in the logs.
        warn!("[AUTH] Token rejected: {}", e);
        AppError::Unauthorized(e.to_string())
    })?;

    // The subject may have been deleted after the token was issued.
    let account = AccountRepository::find_by_email(&state.db, &claims.sub).await?;
    let account = require_active(account)?;

    debug!("[AUTH] Authenticated account: {}", account.email);

    req.extensions_mut().insert(CurrentAccount(account));
    req.extensions_mut().insert(BearerToken(token));
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Active-account gate.
///
/// There is no enabled/disabled flag on the account yet; resolution success
/// is the only activity criterion. This stays a separate step so a real flag
/// check has a place to land.
pub fn require_active(account: Option<Account>) -> Result<Account> {
    account.ok_or_else(|| {
        warn!("[AUTH] No account for token subject");
        AppError::Unauthorized("no account for token subject".to_string())
    })
}
