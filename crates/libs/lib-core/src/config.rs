//! # Application Configuration
//!
//! Configuration is loaded from environment variables exactly once at
//! startup, validated, and then passed by value into the components that
//! need it (router state, token issuance). Nothing in the business logic
//! reads the environment ad hoc.

use lib_utils::envs::{self, get_env, get_env_parse};
use std::env;

/// Signing algorithm names accepted by the token library.
const KNOWN_ALGORITHMS: &[&str] = &[
    "HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "ES256", "ES384",
];

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection URL, selected by `APP_ENV`
    pub database_url: String,

    /// Secret key for token signing and verification
    ///
    /// **Must be at least 32 characters long.** Never logged.
    pub jwt_secret: String,

    /// Signing algorithm name (e.g. `HS256`)
    pub jwt_algorithm: String,

    /// Session token validity in minutes
    ///
    /// Valid range: 1-1440 minutes (one minute to one day).
    pub session_ttl_minutes: i64,

    /// Address the HTTP server binds to
    pub bind_address: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `APP_ENV=dev` selects `DATABASE_URL_DEV`, anything else selects
    /// `DATABASE_URL_PROD`; plain `DATABASE_URL` is the fallback for both.
    pub fn from_env() -> Result<Self, String> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
        let env_specific_url = if app_env.eq_ignore_ascii_case("dev") {
            env::var("DATABASE_URL_DEV")
        } else {
            env::var("DATABASE_URL_PROD")
        };
        let database_url = env_specific_url
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "sqlite:data/accounts.db".to_string());

        let jwt_secret =
            get_env("JWT_SECRET").map_err(|_| "JWT_SECRET must be set in environment")?;

        let jwt_algorithm = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());

        let session_ttl_minutes = match get_env_parse("SESSION_TTL_MINUTES") {
            Ok(ttl) => ttl,
            Err(envs::Error::MissingEnv(_)) => 60,
            Err(e) => return Err(format!("SESSION_TTL_MINUTES must be a valid number: {}", e)),
        };

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_algorithm,
            session_ttl_minutes,
            bind_address,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if !KNOWN_ALGORITHMS.contains(&self.jwt_algorithm.as_str()) {
            return Err(format!(
                "JWT_ALGORITHM '{}' is not a supported algorithm",
                self.jwt_algorithm
            ));
        }

        if self.session_ttl_minutes < 1 || self.session_ttl_minutes > 1440 {
            return Err("SESSION_TTL_MINUTES must be between 1 and 1440 (one day)".to_string());
        }

        Ok(())
    }
}
