//! # Web Library
//!
//! HTTP handlers, middleware, routes, and server setup.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use server::{start_server, AppState, ServerConfig};
