//! # Middleware
//!
//! Axum middleware for authentication, request stamping, and request logging.
//!
//! ## Modules
//!
//! - **[`mw_auth`]**: bearer-token validation and current-account resolution
//! - **[`mw_req_stamp`]**: request ID stamping
//! - **[`mw_logging`]**: request/response logging with sensitive-data redaction

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::{require_auth, BearerToken, CurrentAccount};
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
