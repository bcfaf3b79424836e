//! # Account Repository
//!
//! Database access layer for account records. The repository is the only
//! code that mutates accounts; everything above it works with explicit
//! `AccountForCreate` / `AccountForUpdate` values and `Result`s.

use super::models::{Account, AccountForCreate, AccountForUpdate};
use super::DbPool;
use crate::error::{AppError, Result};
use sqlx::query_as;
use uuid::Uuid;

/// Map a sqlx error to `Conflict` when it is a UNIQUE violation on email.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    let is_unique = err
        .as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false);
    if is_unique {
        AppError::Conflict("Email already registered".to_string())
    } else {
        err.into()
    }
}

/// Account repository for database operations.
pub struct AccountRepository;

impl AccountRepository {
    /// Find an account by its id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Account>> {
        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// Find an account by its email address (exact match, case-sensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Account>> {
        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// * `Conflict` - email already registered
    /// * `Internal` - database failure
    pub async fn create(pool: &DbPool, account_data: AccountForCreate) -> Result<Account> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO accounts (id, email, password_hash, pix_key) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&account_data.email)
        .bind(&account_data.password_hash)
        .bind(&account_data.pix_key)
        .execute(pool)
        .await
        .map_err(map_unique_violation)?;

        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(&id)
            .fetch_one(pool)
            .await?;

        Ok(account)
    }

    /// Update an existing account.
    ///
    /// Only fields that are `Some` in `account_data` are written; the set of
    /// updatable fields is fixed by [`AccountForUpdate`]. Bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no account with that id
    /// * `Conflict` - new email already registered
    pub async fn update(
        pool: &DbPool,
        id: &str,
        account_data: AccountForUpdate,
    ) -> Result<Account> {
        if account_data.is_empty() {
            return Self::find_by_id(pool, id)
                .await?
                .ok_or_else(|| AppError::NotFound("Account not found".to_string()));
        }

        let mut updates = Vec::new();
        if account_data.email.is_some() {
            updates.push("email = ?");
        }
        if account_data.password_hash.is_some() {
            updates.push("password_hash = ?");
        }
        if account_data.pix_key.is_some() {
            updates.push("pix_key = ?");
        }
        updates.push("updated_at = CURRENT_TIMESTAMP");

        let query_str = format!("UPDATE accounts SET {} WHERE id = ?", updates.join(", "));

        let mut query = sqlx::query(&query_str);
        if let Some(ref email) = account_data.email {
            query = query.bind(email);
        }
        if let Some(ref password_hash) = account_data.password_hash {
            query = query.bind(password_hash);
        }
        if let Some(ref pix_key) = account_data.pix_key {
            query = query.bind(pix_key);
        }

        let result = query
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(account)
    }

    /// Attach a profile picture to an existing account.
    ///
    /// A separate write scoped to the row id; account creation with an
    /// uploaded image performs this as its second write.
    pub async fn attach_image(pool: &DbPool, id: &str, bytes: &[u8]) -> Result<()> {
        let result = sqlx::query(
            "UPDATE accounts SET profile_picture = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(bytes)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }
}
