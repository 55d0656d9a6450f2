//! Router assembly.

use axum::{
    Router, middleware,
    routing::{any, get, post},
};

use crate::auth;
use crate::handlers::{alerts, meta, restricted, tourists, ws};
use crate::state::AppState;

/// Create the API router.
///
/// Reads are public by default and gated only when `protect_reads` is set;
/// the write commands and the push handshake always require the token. The
/// push endpoint carries no middleware layer because browser WebSocket
/// clients present the credential via query parameter, checked in-handler.
pub fn create_router(state: AppState) -> Router<AppState> {
    let mut read_routes = Router::new()
        .route("/api/tourists", get(tourists::list_tourists))
        .route("/api/alerts", get(alerts::list_alerts))
        .route("/api/restricted", get(restricted::restricted_polygon));

    if state.config.auth.protect_reads {
        read_routes = read_routes.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));
    }

    let write_routes = Router::new()
        .route("/api/alerts/{id}/ack", post(alerts::acknowledge_alert))
        .route("/api/alerts/{id}/resolve", post(alerts::resolve_alert))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .merge(read_routes)
        .merge(write_routes)
        .route("/api/ws", any(ws::websocket_handler))
        .fallback(meta::route_not_found)
}
