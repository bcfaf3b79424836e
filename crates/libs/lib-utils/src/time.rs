//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Get the current UTC time as seconds since the Unix epoch.
///
/// Token expiry (`exp`) and issue (`iat`) claims use this representation.
pub fn now_utc_ts() -> i64 {
    Utc::now().timestamp()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}
