//! # Account Handlers
//!
//! Registration, lookup, partial update, and profile picture upload.
//!
//! Registration arrives as `multipart/form-data` so an image can ride along
//! with the account fields. The image, when present, is attached in a second
//! write scoped to the freshly created row.

use crate::middleware::CurrentAccount;
use crate::server::AppState;
use axum::extract::{Extension, Json, Multipart, Path, State};
use axum::http::StatusCode;
use lib_core::dto::{
    AccountResponse, AccountUpdateRequest, MessageResponse, ProfilePictureResponse,
};
use lib_core::model::store::models::{AccountForCreate, AccountForUpdate};
use lib_core::model::store::AccountRepository;
use lib_core::{AppError, Result};
use lib_utils::b64::b64u_encode;
use lib_utils::validation::{validate_email, validate_not_empty};
use tracing::{debug, info, warn};

/// Multipart field name carrying the profile image.
const PROFILE_PICTURE_FIELD: &str = "profile_picture";

/// Parsed registration form.
#[derive(Default)]
struct RegisterForm {
    email: Option<String>,
    password: Option<String>,
    pix_key: Option<String>,
    image: Option<Vec<u8>>,
}

async fn parse_register_form(mut multipart: Multipart) -> Result<RegisterForm> {
    let mut form = RegisterForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "email" => {
                form.email = Some(read_text_field(field, "email").await?);
            }
            "password" => {
                form.password = Some(read_text_field(field, "password").await?);
            }
            "pix_key" => {
                form.pix_key = Some(read_text_field(field, "pix_key").await?);
            }
            PROFILE_PICTURE_FIELD => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable {} part: {}", PROFILE_PICTURE_FIELD, e))
                })?;
                form.image = Some(bytes.to_vec());
            }
            other => {
                debug!("[REGISTER] Ignoring unknown multipart field '{}'", other);
            }
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Unreadable {} field: {}", name, e)))
}

/// Registration handler: create an account, optionally with a profile image.
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    info!("[REGISTER] New account registration");

    let form = parse_register_form(multipart).await?;

    let email = form
        .email
        .ok_or_else(|| AppError::Validation("email is required".to_string()))?;
    validate_email(&email).map_err(AppError::Validation)?;

    let password = form
        .password
        .ok_or_else(|| AppError::Validation("password is required".to_string()))?;

    if let Some(ref pix_key) = form.pix_key {
        validate_not_empty(pix_key, "pix_key").map_err(AppError::Validation)?;
    }

    debug!("[REGISTER] Hashing password");
    let password_hash = hash_for_request(&password)?;

    debug!("[REGISTER] Creating account");
    let account = AccountRepository::create(
        &state.db,
        AccountForCreate::new(email, password_hash, form.pix_key),
    )
    .await?;

    // Second write, scoped to the new row's id.
    let account = if let Some(image) = form.image {
        debug!("[REGISTER] Attaching profile picture ({} bytes)", image.len());
        AccountRepository::attach_image(&state.db, &account.id, &image).await?;
        AccountRepository::find_by_id(&state.db, &account.id)
            .await?
            .ok_or_else(|| AppError::Internal("Account vanished after creation".to_string()))?
    } else {
        account
    };

    info!("[REGISTER] Account {} created", account.id);

    Ok((StatusCode::CREATED, Json((&account).into())))
}

/// Current account, as resolved by the auth middleware.
pub async fn me(
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> Json<AccountResponse> {
    Json((&account).into())
}

/// Lookup by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>> {
    let account = AccountRepository::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

    Ok(Json((&account).into()))
}

/// Partial update of the current account.
///
/// Only email, password, and pix_key are updatable; each is validated
/// before it is written.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Json(req): Json<AccountUpdateRequest>,
) -> Result<Json<AccountResponse>> {
    let mut update = AccountForUpdate::new();

    if let Some(email) = req.email {
        validate_email(&email).map_err(AppError::Validation)?;
        update = update.email(email);
    }
    if let Some(password) = req.password {
        update = update.password_hash(hash_for_request(&password)?);
    }
    if let Some(pix_key) = req.pix_key {
        validate_not_empty(&pix_key, "pix_key").map_err(AppError::Validation)?;
        update = update.pix_key(pix_key);
    }

    if update.is_empty() {
        return Err(AppError::Validation(
            "No updatable fields provided".to_string(),
        ));
    }

    let updated = AccountRepository::update(&state.db, &account.id, update).await?;
    info!("[ACCOUNT] Account {} updated", updated.id);

    Ok(Json((&updated).into()))
}

/// Profile picture upload for the current account.
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some(PROFILE_PICTURE_FIELD) {
            let bytes = field.bytes().await.map_err(|e| {
                AppError::Validation(format!("Unreadable {} part: {}", PROFILE_PICTURE_FIELD, e))
            })?;
            image = Some(bytes.to_vec());
        }
    }

    let image = image.ok_or_else(|| {
        AppError::Validation(format!("{} part is required", PROFILE_PICTURE_FIELD))
    })?;
    if image.is_empty() {
        return Err(AppError::Validation("Uploaded image is empty".to_string()));
    }

    AccountRepository::attach_image(&state.db, &account.id, &image).await?;
    info!(
        "[ACCOUNT] Profile picture attached to {} ({} bytes)",
        account.id,
        image.len()
    );

    Ok(Json(MessageResponse {
        message: "Image uploaded successfully".to_string(),
    }))
}

/// Profile picture of the current account, base64url-encoded.
pub async fn profile_picture(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> Result<Json<ProfilePictureResponse>> {
    // Re-query: the middleware's snapshot may predate an upload in flight.
    let account = AccountRepository::find_by_id(&state.db, &account.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

    let image = account
        .profile_picture
        .ok_or_else(|| AppError::NotFound("No profile picture uploaded".to_string()))?;

    Ok(Json(ProfilePictureResponse {
        image: b64u_encode(&image),
    }))
}

/// Hash a plaintext for a request, mapping weak passwords to a 400.
fn hash_for_request(password: &str) -> Result<String> {
    lib_auth::hash_password(password).map_err(|e| match e {
        lib_auth::pwd::Error::WeakPassword => AppError::Validation(e.to_string()),
        other => {
            warn!("[ACCOUNT] Password hashing failed: {}", other);
            AppError::Internal("Failed to hash password".to_string())
        }
    })
}
