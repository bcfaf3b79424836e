//! # Data Transfer Objects
//!
//! Request and response shapes for the JSON API. All DTOs use snake_case
//! field names; optional fields are omitted when `None`.

// region: --- Modules
pub mod account;
pub mod auth;
// endregion: --- Modules

// region: --- Re-exports
pub use account::{
    AccountResponse, AccountUpdateRequest, MessageResponse, ProfilePictureResponse,
};
pub use auth::{ErrorResponse, LoginRequest, TokenResponse};
// endregion: --- Re-exports
