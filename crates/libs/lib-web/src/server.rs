//! # Server Setup
//!
//! Application state, CORS, and HTTP server startup.
//!
//! Configuration is loaded from the environment exactly once here and then
//! travels inside [`AppState`]; nothing downstream reads the environment.

// region: --- Imports
use crate::routes;
use axum::http::{header, HeaderValue, Method};
use lib_auth::{Algorithm, TokenBlacklist};
use lib_core::{create_pool, create_schema, AppError, Config, DbPool};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    /// Revoked-token set; the only shared mutable state in the process.
    pub blacklist: Arc<TokenBlacklist>,
}

impl AppState {
    /// Parse the configured signing algorithm name.
    pub fn signing_algorithm(&self) -> Result<Algorithm, AppError> {
        self.config.jwt_algorithm.parse().map_err(|_| {
            AppError::Config(format!(
                "Unsupported JWT_ALGORITHM '{}'",
                self.config.jwt_algorithm
            ))
        })
    }
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<TokenBlacklist> {
    fn from_ref(state: &AppState) -> Self {
        state.blacklist.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration not sourced from the environment.
pub struct ServerConfig {
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:8000".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails, the
/// database cannot be opened, schema creation fails, or binding fails.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("[STARTUP] Account backend starting");

    let pool = create_pool(&config.database_url).await?;
    create_schema(&pool).await?;
    info!("[STARTUP] Database ready");

    let state = AppState {
        db: pool,
        config: config.clone(),
        blacklist: Arc::new(TokenBlacklist::new()),
    };

    let cors = build_cors(&server_config.allowed_origins)?;
    let app = routes::app(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("[STARTUP] Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::PUT])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
// endregion: --- Server Setup
