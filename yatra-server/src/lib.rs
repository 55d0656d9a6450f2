//! # Yatra Server
//!
//! Tourist-safety monitoring backend.
//!
//! ## Overview
//!
//! Yatra Server keeps an in-memory picture of every tracked tourist and
//! raised alert and provides:
//!
//! - **Live positions**: a periodic movement tick broadcast to every
//!   connected dashboard over WebSocket
//! - **Alert commands**: token-gated acknowledge/resolve endpoints that fan
//!   the updated alert collection out to all viewers
//! - **Geofencing data**: the static restricted-zone polygon for map
//!   overlays and containment checks
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - `yatra-core` for the seeded safety store and movement simulation
//! - a uuid-keyed viewer registry for push fan-out
//! - bearer-token access control on mutations and the push channel

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod push;
pub mod routes;
pub mod scheduler;
pub mod state;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Assemble the full application router with middleware layers applied.
pub fn app(state: AppState) -> Router {
    // Permissive CORS in dev mode (the dashboard is served from another
    // origin); same-origin only otherwise.
    let cors_layer = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    routes::create_router(state.clone())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
