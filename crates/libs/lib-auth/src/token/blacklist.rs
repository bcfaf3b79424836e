//! # Token Blacklist
//!
//! Process-wide set of revoked tokens, keyed by the token's own expiry.
//!
//! An entry only matters until the token it names would have expired on its
//! own, so insertion prunes entries whose expiry has passed. The set lives
//! for the process lifetime and is not persisted; a restart un-revokes
//! everything, which is acceptable for single-instance deployment.

use lib_utils::time::now_utc_ts;
use std::collections::HashMap;
use std::sync::RwLock;

/// Revoked-token set with interior mutability.
///
/// Shared across request tasks as `Arc<TokenBlacklist>`. Individual
/// insertions and lookups are atomic under the lock; no ordering is promised
/// between a `revoke` and an in-flight validation of the same token.
#[derive(Debug, Default)]
pub struct TokenBlacklist {
    revoked: RwLock<HashMap<String, i64>>,
}

impl TokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token until `expires_at` (its own `exp` claim).
    ///
    /// Idempotent. Prunes entries whose expiry has passed before inserting.
    pub fn revoke(&self, token: &str, expires_at: i64) {
        let mut revoked = self.revoked.write().unwrap_or_else(|e| e.into_inner());
        let now = now_utc_ts();
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(token.to_owned(), expires_at);
    }

    /// Whether a token has been revoked.
    pub fn contains(&self, token: &str) -> bool {
        self.revoked
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.revoked.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
