//! # Backend Entry Point
//!
//! Loads configuration from the environment, opens the database, and serves
//! the account/authentication API.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_server(ServerConfig::default()).await
}
