//! # Authentication Library
//!
//! Password hashing, JWT session tokens, and token revocation.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use jsonwebtoken::Algorithm;
pub use pwd::{hash_password, verify_password};
pub use token::{Claims, TokenBlacklist, issue_token, decode_token, validate_token};
