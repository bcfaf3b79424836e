//! # JWT Session Tokens
//!
//! Issues and validates signed bearer tokens, and tracks revoked tokens in
//! the process-wide [`TokenBlacklist`].
//!
//! Tokens carry the account email as `sub` and an absolute expiry as `exp`.
//! A token is valid until the earlier of its expiry and an explicit
//! revocation; once expired or revoked it never becomes valid again.
//!
//! The signing secret and algorithm come from configuration. They are never
//! logged.

pub mod blacklist;

pub use blacklist::TokenBlacklist;

use chrono::Duration;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use lib_utils::time::{now_utc, now_utc_ts};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback token lifetime when the caller does not supply one.
///
/// The configured session length (one hour by default) normally overrides
/// this; the fallback only applies to ad hoc issuance without a ttl.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to encode token")]
    Encode,

    /// Bad signature, malformed token, or a required claim is missing.
    #[error("Token signature invalid or malformed")]
    Invalid,

    #[error("Token has expired")]
    Expired,

    #[error("Token has been revoked")]
    Revoked,
}

/// Issue a signed token for `subject` expiring `ttl` from now.
///
/// Falls back to [`DEFAULT_TOKEN_TTL_MINUTES`] when `ttl` is `None`.
pub fn issue_token(
    subject: &str,
    secret: &str,
    algorithm: Algorithm,
    ttl: Option<Duration>,
) -> Result<String, Error> {
    let now = now_utc();
    let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));

    let claims = Claims {
        sub: subject.to_string(),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| Error::Encode)
}

/// Decode a token and check its signature and expiry.
///
/// Zero leeway: a token whose `exp` is not strictly in the future is
/// rejected. A missing `sub` or `exp` claim fails deserialization and is
/// reported as [`Error::Invalid`].
pub fn decode_token(token: &str, secret: &str, algorithm: Algorithm) -> Result<Claims, Error> {
    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => Error::Expired,
        _ => Error::Invalid,
    })?;

    Ok(token_data.claims)
}

/// Full validation: signature, required claims, revocation, expiry.
///
/// This is what request authorization goes through. The blacklist check
/// happens after signature verification, mirroring the token lifecycle:
/// a revoked token stays invalid for its remaining natural lifetime.
pub fn validate_token(
    token: &str,
    secret: &str,
    algorithm: Algorithm,
    blacklist: &TokenBlacklist,
) -> Result<Claims, Error> {
    let claims = decode_token(token, secret, algorithm)?;

    if blacklist.contains(token) {
        return Err(Error::Revoked);
    }

    // exp must be strictly in the future; a ttl of zero is already expired.
    if claims.exp <= now_utc_ts() {
        return Err(Error::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";
    const ALG: Algorithm = Algorithm::HS256;

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let blacklist = TokenBlacklist::new();
        let token =
            issue_token("a@b.com", SECRET, ALG, Some(Duration::hours(1))).expect("issue");

        let claims = validate_token(&token, SECRET, ALG, &blacklist).expect("validate");
        assert_eq!(claims.sub, "a@b.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_is_three_part_compact_string() {
        let token = issue_token("a@b.com", SECRET, ALG, None).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_default_ttl_is_fifteen_minutes() {
        let token = issue_token("a@b.com", SECRET, ALG, None).unwrap();
        let claims = decode_token(&token, SECRET, ALG).unwrap();
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_zero_ttl_is_immediately_invalid() {
        let blacklist = TokenBlacklist::new();
        let token = issue_token("a@b.com", SECRET, ALG, Some(Duration::zero())).unwrap();

        let result = validate_token(&token, SECRET, ALG, &blacklist);
        assert!(matches!(result, Err(Error::Expired)));
    }

    #[test]
    fn test_past_expiry_is_invalid() {
        let blacklist = TokenBlacklist::new();
        let token = issue_token("a@b.com", SECRET, ALG, Some(Duration::minutes(-5))).unwrap();

        let result = validate_token(&token, SECRET, ALG, &blacklist);
        assert!(matches!(result, Err(Error::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let blacklist = TokenBlacklist::new();
        let token = issue_token("a@b.com", SECRET, ALG, Some(Duration::hours(1))).unwrap();

        let result = validate_token(&token, "another-secret-also-32-characters-long!!", ALG, &blacklist);
        assert!(matches!(result, Err(Error::Invalid)));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let blacklist = TokenBlacklist::new();
        let token = issue_token("a@b.com", SECRET, ALG, Some(Duration::hours(1))).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        let result = validate_token(&tampered, SECRET, ALG, &blacklist);
        assert!(matches!(result, Err(Error::Invalid)));
    }

    #[test]
    fn test_missing_subject_claim_is_invalid() {
        // Hand-roll a token without `sub`.
        #[derive(serde::Serialize)]
        struct NoSub {
            exp: i64,
            iat: i64,
        }
        let now = now_utc_ts();
        let token = encode(
            &Header::new(ALG),
            &NoSub { exp: now + 3600, iat: now },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = decode_token(&token, SECRET, ALG);
        assert!(matches!(result, Err(Error::Invalid)));
    }

    #[test]
    fn test_revoked_token_is_invalid_and_revocation_is_idempotent() {
        let blacklist = TokenBlacklist::new();
        let token = issue_token("a@b.com", SECRET, ALG, Some(Duration::hours(1))).unwrap();
        let claims = decode_token(&token, SECRET, ALG).unwrap();

        assert!(validate_token(&token, SECRET, ALG, &blacklist).is_ok());

        blacklist.revoke(&token, claims.exp);
        assert!(matches!(
            validate_token(&token, SECRET, ALG, &blacklist),
            Err(Error::Revoked)
        ));

        // Second revocation changes nothing.
        blacklist.revoke(&token, claims.exp);
        assert!(matches!(
            validate_token(&token, SECRET, ALG, &blacklist),
            Err(Error::Revoked)
        ));
        assert_eq!(blacklist.len(), 1);
    }
}
