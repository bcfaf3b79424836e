//! # Routes
//!
//! Route registration. Protected routes sit behind the bearer-token
//! middleware; registration, login, and health are public.

use crate::handlers::{self, account, auth};
use crate::middleware::{log_requests, require_auth, stamp_req};
use crate::server::AppState;
use axum::routing::{get, post, put};
use axum::Router;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/accounts/me",
            get(account::me).patch(account::update_me),
        )
        .route(
            "/api/accounts/me/profile-picture",
            put(account::upload_profile_picture).get(account::profile_picture),
        )
        .route("/api/accounts/{id}", get(account::get_by_id))
        .route("/api/auth/logout", post(auth::logout))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/accounts", post(account::register))
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(axum::middleware::from_fn(stamp_req))
        .with_state(state)
}
