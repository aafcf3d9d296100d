//! Axum HTTP server for the SnapVid resolver.
//!
//! This crate provides:
//! - The landing route and its page state machine
//! - Server-rendered HTML views
//! - Health endpoints, CORS, request IDs, and request logging

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod view;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::AppState;
