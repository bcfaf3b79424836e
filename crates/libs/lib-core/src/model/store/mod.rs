//! # Database Store
//!
//! Connection pool, schema creation, and the account repository.

// region: --- Modules
pub mod account_repository;
pub mod models;
// endregion: --- Modules

// region: --- Re-exports
pub use account_repository::AccountRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use crate::error::{AppError, Result};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

/// Type alias for the SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()
        .map_err(|e| AppError::Config(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Create the accounts table if it does not exist.
///
/// Runs at startup. Email uniqueness is enforced here, at the store.
pub async fn create_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            profile_picture BLOB,
            pix_key TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
// endregion: --- Types and Functions
